//! Push buttons, toggles, image buttons and round buttons

use glam::{Vec2, Vec3};

use super::draw::TEXT_LIFT;
use super::Ui;
use crate::animation::Easing;
use crate::backend::{UiImage, UiSound, UiVisual};
use crate::id::IdHash;
use crate::interactor::{InteractorEvents, InteractorId};
use crate::state::ButtonState;
use crate::theme::UiColor;

/// Shallowest a pressed button face is drawn
const MIN_PRESS_DEPTH: f32 = 0.002;

/// Duration of the press highlight flash, in seconds
const FLASH_DURATION: f32 = 0.2;

const FLASH_EASE: Easing = Easing::Overshoot(1.7);

/// Where an image button puts its image relative to the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonLayout {
    /// Image on the left, label filling the rest
    #[default]
    Left,
    /// Image on the right, label filling the rest
    Right,
    /// Image in the middle, label underneath
    Center,
    /// Image in the middle, no label
    CenterNoText,
    /// Label only, the image is not drawn
    None,
}

/// What a button's interaction did this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonOutcome {
    /// How far the face sits from the back plate, 0 is fully pressed
    pub finger_offset: f32,
    pub state: ButtonState,
    pub focus: ButtonState,
    pub interactor: Option<InteractorId>,
}

impl Ui {
    /// Press behavior for a flat button whose back sits at `top_left.z`,
    /// using the configured depth and pressing at half of it
    pub fn button_behavior(&mut self, top_left: Vec3, size: Vec2, id: IdHash) -> ButtonOutcome {
        let depth = self.settings.depth;
        self.button_behavior_depth(top_left, size, id, depth, depth / 2.0)
    }

    /// Press behavior for a button face `button_depth` in front of its back,
    /// which presses once the fingertip is within `activation_depth` of the
    /// back
    pub fn button_behavior_depth(
        &mut self,
        top_left: Vec3,
        size: Vec2,
        id: IdHash,
        button_depth: f32,
        activation_depth: f32,
    ) -> ButtonOutcome {
        self.mark_element(id);
        let depth = button_depth;
        let hit = self.plate_1h(
            id,
            InteractorEvents::POKE,
            top_left - Vec3::new(0.0, 0.0, depth),
            size,
        );

        let mut outcome = ButtonOutcome {
            finger_offset: depth,
            state: ButtonState::INACTIVE,
            focus: hit.focus,
            interactor: hit.interactor,
        };

        if hit.focus.is_active() {
            if let Some(i) = hit.interactor {
                let actor = self.interactors.get(i);
                let mut offset = top_left.z - (hit.at.z + actor.radius);
                let mut pressed = offset < activation_depth;
                // A held pinch keeps the button down, and a fresh pinch or
                // select presses it outright
                if (actor.active_prev == id && actor.pinch_state.is_active()) || actor.pinch_state.is_just_active() {
                    pressed = true;
                    offset = 0.0;
                }
                outcome.state = self.interactors.set_active(Some(i), id, pressed);
                outcome.finger_offset = offset.max(MIN_PRESS_DEPTH).min(depth);
            }
        } else if hit.focus.is_just_inactive() {
            outcome.state = self.interactors.set_active(hit.interactor, id, false);
        }

        if let Some(i) = outcome.interactor {
            let at = self.interactors.get(i).finger_world;
            if outcome.state.is_just_active() {
                self.play_sound(UiSound::Interact, at);
            } else if outcome.state.is_just_inactive() {
                self.play_sound(UiSound::Uninteract, at);
            }
        }
        outcome
    }

    /// Highlight blend for a button-like element: a flash after a press,
    /// otherwise brighter while `lit`
    fn flash_blend(&mut self, id: IdHash, lit: bool) -> f32 {
        if self.anim_has(id, FLASH_DURATION) {
            let t = self.anim_elapsed(id, FLASH_DURATION);
            FLASH_EASE.interpolate(1.0, 2.0, t)
        } else if lit {
            2.0
        } else {
            1.0
        }
    }

    /// A button sized to its label. Returns true on the frame it's pressed.
    pub fn button(&mut self, label: &str) -> bool {
        let size = self.text_size(label);
        let (pos, size) = self.layout.reserve(size, true);
        self.button_at(label, pos, size)
    }

    /// A button of a given size; zero axes fill the line
    pub fn button_sz(&mut self, label: &str, size: Vec2) -> bool {
        let (pos, size) = self.layout.reserve(size, false);
        self.button_at(label, pos, size)
    }

    /// A button at an explicit local position, outside of layout
    pub fn button_at(&mut self, label: &str, top_left: Vec3, size: Vec2) -> bool {
        self.button_face_at(label, None, top_left, size)
    }

    /// A button showing `image` beside, above or instead of its label.
    /// Returns true on the frame it's pressed.
    pub fn button_img(&mut self, label: &str, image: UiImage, layout: ButtonLayout) -> bool {
        let size = self.image_button_size(label, image, layout);
        let (pos, size) = self.layout.reserve(size, true);
        self.button_img_at(label, image, layout, pos, size)
    }

    pub fn button_img_sz(&mut self, label: &str, image: UiImage, layout: ButtonLayout, size: Vec2) -> bool {
        let (pos, size) = self.layout.reserve(size, false);
        self.button_img_at(label, image, layout, pos, size)
    }

    pub fn button_img_at(
        &mut self,
        label: &str,
        image: UiImage,
        layout: ButtonLayout,
        top_left: Vec3,
        size: Vec2,
    ) -> bool {
        self.button_face_at(label, Some((image, layout)), top_left, size)
    }

    fn button_face_at(
        &mut self,
        label: &str,
        image: Option<(UiImage, ButtonLayout)>,
        top_left: Vec3,
        size: Vec2,
    ) -> bool {
        let id = self.ids.stack_hash(label);
        let outcome = self.button_behavior(top_left, size, id);

        if outcome.state.is_just_active() {
            self.anim_start(id);
        }
        let mut blend = self.flash_blend(id, outcome.focus.is_active());
        blend = blend.max(2.0 - outcome.finger_offset / self.settings.depth);

        let color = self.element_color(UiColor::Common, blend);
        self.draw_element(
            UiVisual::Button,
            top_left,
            Vec3::new(size.x, size.y, outcome.finger_offset),
            color,
        );
        match image {
            Some((image, layout)) => self.draw_image_content(label, image, layout, top_left, size, outcome.finger_offset),
            None => self.draw_label_on(label, top_left, size, outcome.finger_offset),
        }

        outcome.state.is_just_active()
    }

    /// A button that flips `value` each time it's pressed. Returns true on
    /// the frame it flips.
    pub fn toggle(&mut self, label: &str, value: &mut bool) -> bool {
        let size = self.text_size(label);
        let (pos, size) = self.layout.reserve(size, true);
        self.toggle_at(label, value, pos, size)
    }

    pub fn toggle_sz(&mut self, label: &str, value: &mut bool, size: Vec2) -> bool {
        let (pos, size) = self.layout.reserve(size, false);
        self.toggle_at(label, value, pos, size)
    }

    pub fn toggle_at(&mut self, label: &str, value: &mut bool, top_left: Vec3, size: Vec2) -> bool {
        self.toggle_face_at(label, value, None, top_left, size)
    }

    /// A toggle showing `image_on` while `value` is set and `image_off`
    /// otherwise. Returns true on the frame it flips.
    pub fn toggle_img(
        &mut self,
        label: &str,
        value: &mut bool,
        image_off: UiImage,
        image_on: UiImage,
        layout: ButtonLayout,
    ) -> bool {
        let shown = if *value { image_on } else { image_off };
        let size = self.image_button_size(label, shown, layout);
        let (pos, size) = self.layout.reserve(size, true);
        self.toggle_img_at(label, value, image_off, image_on, layout, pos, size)
    }

    pub fn toggle_img_sz(
        &mut self,
        label: &str,
        value: &mut bool,
        image_off: UiImage,
        image_on: UiImage,
        layout: ButtonLayout,
        size: Vec2,
    ) -> bool {
        let (pos, size) = self.layout.reserve(size, false);
        self.toggle_img_at(label, value, image_off, image_on, layout, pos, size)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn toggle_img_at(
        &mut self,
        label: &str,
        value: &mut bool,
        image_off: UiImage,
        image_on: UiImage,
        layout: ButtonLayout,
        top_left: Vec3,
        size: Vec2,
    ) -> bool {
        self.toggle_face_at(label, value, Some((image_off, image_on, layout)), top_left, size)
    }

    fn toggle_face_at(
        &mut self,
        label: &str,
        value: &mut bool,
        images: Option<(UiImage, UiImage, ButtonLayout)>,
        top_left: Vec3,
        size: Vec2,
    ) -> bool {
        let id = self.ids.stack_hash(label);
        let outcome = self.button_behavior(top_left, size, id);

        if outcome.state.is_just_active() {
            self.anim_start(id);
            *value = !*value;
        }
        let blend = self.flash_blend(id, *value || outcome.focus.is_active());

        // A toggled-on button rests partway in
        let settings = self.settings;
        let offset = if *value {
            outcome
                .finger_offset
                .min(settings.backplate_depth * settings.depth + 0.001)
        } else {
            outcome.finger_offset
        };

        let color = self.element_color(UiColor::Common, blend);
        self.draw_element(UiVisual::Toggle, top_left, Vec3::new(size.x, size.y, offset), color);
        match images {
            Some((off, on, layout)) => {
                let image = if *value { on } else { off };
                self.draw_image_content(label, image, layout, top_left, size, offset);
            }
            None => self.draw_label_on(label, top_left, size, offset),
        }

        outcome.state.is_just_active()
    }

    /// A round button, `diameter` 0 uses the line height
    pub fn button_round(&mut self, id: &str, diameter: f32) -> bool {
        let diameter = if diameter == 0.0 { self.line_height() } else { diameter };
        let (pos, size) = self.layout.reserve(Vec2::splat(diameter), false);
        self.button_round_at(id, pos, size.x)
    }

    pub fn button_round_at(&mut self, id: &str, top_left: Vec3, diameter: f32) -> bool {
        let hash = self.ids.stack_hash(id);
        let outcome = self.button_behavior(top_left, Vec2::splat(diameter), hash);

        if outcome.state.is_just_active() {
            self.anim_start(hash);
        }
        let blend = self.flash_blend(hash, outcome.state.is_active());

        let settings = self.settings;
        let border = settings.backplate_border;
        let face = self.element_color(UiColor::Common, blend);
        self.draw_element(
            UiVisual::ButtonRound,
            top_left,
            Vec3::new(diameter, diameter, outcome.finger_offset),
            face,
        );
        let rim = self.palette.border.scaled(blend);
        self.draw_element(
            UiVisual::ButtonRound,
            top_left + Vec3::new(border, border, 0.001),
            Vec3::new(
                diameter + border * 2.0,
                diameter + border * 2.0,
                settings.backplate_depth * settings.depth + 0.001,
            ),
            rim,
        );

        outcome.state.is_just_active()
    }

    /// Centered label on the face of a button pressed to `offset`
    fn draw_label_on(&mut self, label: &str, top_left: Vec3, size: Vec2, offset: f32) {
        let padding = self.settings.padding;
        self.draw_label_in(
            label,
            top_left - Vec3::new(padding, padding, 0.0),
            size - Vec2::splat(padding * 2.0),
            offset,
        );
    }

    /// Label centered in `area`, a region of a face pressed to `offset`
    fn draw_label_in(&mut self, label: &str, area_top_left: Vec3, area: Vec2, offset: f32) {
        if area.x <= 0.0 || area.y <= 0.0 {
            return;
        }
        let inset = ((area - self.text_size(label)) / 2.0).max(Vec2::ZERO);
        self.draw_text(
            label,
            area_top_left - Vec3::new(inset.x, inset.y, offset + TEXT_LIFT),
            area,
        );
    }

    /// Size an image button asks the layout for, before padding
    fn image_button_size(&self, label: &str, image: UiImage, layout: ButtonLayout) -> Vec2 {
        let settings = self.settings;
        let font = settings.text_height;
        match layout {
            ButtonLayout::Center | ButtonLayout::CenterNoText => Vec2::splat(font),
            ButtonLayout::None => self.text_size(label),
            ButtonLayout::Left | ButtonLayout::Right => {
                let text = self.text_size(label);
                Vec2::new(text.x + font * image.aspect + settings.gutter, font)
            }
        }
    }

    /// Image and label on the face of a button pressed to `offset`. An
    /// image with no room left is dropped along with its label.
    fn draw_image_content(
        &mut self,
        label: &str,
        image: UiImage,
        layout: ButtonLayout,
        top_left: Vec3,
        size: Vec2,
        offset: f32,
    ) {
        let settings = self.settings;
        let padding = settings.padding;
        let pad2 = padding * 2.0;
        let pad2gutter = pad2 + settings.gutter;
        let depth = offset + TEXT_LIFT;
        let aspect = image.aspect.max(f32::EPSILON);

        match layout {
            ButtonLayout::None => self.draw_label_on(label, top_left, size, offset),
            ButtonLayout::Left | ButtonLayout::Right => {
                let height = (size.y - pad2).min((size.x - pad2gutter) * 0.5 / aspect);
                if height <= 0.0 {
                    return;
                }
                let width = height * aspect;
                let (image_x, text_x) = if layout == ButtonLayout::Left {
                    (padding + width / 2.0, padding + width + settings.gutter)
                } else {
                    (size.x - padding - width / 2.0, padding)
                };
                self.draw_image(image, top_left - Vec3::new(image_x, size.y / 2.0, depth), height);
                let area = Vec2::new(size.x - (width + pad2gutter), size.y - pad2);
                self.draw_label_in(label, top_left - Vec3::new(text_x, padding, 0.0), area, offset);
            }
            ButtonLayout::Center | ButtonLayout::CenterNoText => {
                let height = (size.y - pad2).min((size.x - pad2) / aspect);
                if height <= 0.0 {
                    return;
                }
                self.draw_image(image, top_left - Vec3::new(size.x / 2.0, size.y / 2.0, depth), height);
                if layout == ButtonLayout::Center {
                    let below = size.y / 2.0 + height / 2.0;
                    let area = Vec2::new(size.x - pad2, size.y - padding * 0.25 - below);
                    self.draw_label_in(label, top_left - Vec3::new(padding, below, 0.0), area, offset);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DrawCommand, NullAudioBackend, NullKeyboardBackend, NullRenderBackend};
    use crate::input::{FrameInput, HandInput};
    use crate::settings::UiSettings;

    const SIZE: Vec2 = Vec2::new(0.1, 0.04);

    fn frame(ui: &mut Ui, right: Option<HandInput>) {
        let mut input = FrameInput::default();
        if let Some(hand) = right {
            input.hands[1] = hand;
        }
        ui.begin_frame(&input);
    }

    fn end(ui: &mut Ui) {
        ui.end_frame(&mut NullRenderBackend, &mut NullAudioBackend, &mut NullKeyboardBackend);
    }

    fn finger(z: f32) -> Option<HandInput> {
        Some(HandInput::tracked_at(Vec3::new(-0.05, -0.02, z)))
    }

    #[test]
    fn test_press_then_release() {
        let mut ui = Ui::default();

        frame(&mut ui, finger(-0.025));
        assert!(!ui.button_at("Go", Vec3::ZERO, SIZE));
        end(&mut ui);

        frame(&mut ui, finger(-0.008));
        assert!(ui.button_at("Go", Vec3::ZERO, SIZE));
        end(&mut ui);

        frame(&mut ui, finger(-0.008));
        assert!(!ui.button_at("Go", Vec3::ZERO, SIZE));
        assert!(ui.last_element_hand_active(crate::input::Handed::Right).is_active());
        end(&mut ui);

        // Hand leaves entirely: focus and activation lapse
        frame(&mut ui, None);
        assert!(!ui.button_at("Go", Vec3::ZERO, SIZE));
        end(&mut ui);
        frame(&mut ui, None);
        ui.button_at("Go", Vec3::ZERO, SIZE);
        assert!(!ui.last_element_hand_active(crate::input::Handed::Right).is_active());
        end(&mut ui);
    }

    #[test]
    fn test_pinch_presses_focused_button() {
        let mut ui = Ui::default();
        frame(&mut ui, finger(-0.025));
        ui.button_at("Go", Vec3::ZERO, SIZE);
        end(&mut ui);

        let mut hand = HandInput::tracked_at(Vec3::new(-0.05, -0.02, -0.025));
        hand.pinched = true;
        frame(&mut ui, Some(hand));
        assert!(ui.button_at("Go", Vec3::ZERO, SIZE));
        end(&mut ui);
    }

    #[test]
    fn test_toggle_flips_once_per_press() {
        let mut ui = Ui::default();
        let mut value = false;

        frame(&mut ui, finger(-0.025));
        ui.toggle_at("T", &mut value, Vec3::ZERO, SIZE);
        end(&mut ui);
        assert!(!value);

        frame(&mut ui, finger(-0.008));
        assert!(ui.toggle_at("T", &mut value, Vec3::ZERO, SIZE));
        end(&mut ui);
        assert!(value);

        frame(&mut ui, finger(-0.008));
        assert!(!ui.toggle_at("T", &mut value, Vec3::ZERO, SIZE));
        end(&mut ui);
        assert!(value);
    }

    #[test]
    fn test_press_plays_interact_sound() {
        let mut ui = Ui::default();
        frame(&mut ui, finger(-0.025));
        ui.button_at("Go", Vec3::ZERO, SIZE);
        end(&mut ui);

        frame(&mut ui, finger(-0.008));
        ui.button_at("Go", Vec3::ZERO, SIZE);
        let mut sounds: Vec<(UiSound, Vec3)> = Vec::new();
        ui.end_frame(&mut NullRenderBackend, &mut sounds, &mut NullKeyboardBackend);
        assert_eq!(sounds.len(), 1);
        assert_eq!(sounds[0].0, UiSound::Interact);
    }

    #[test]
    fn test_disabled_button_never_presses() {
        let mut ui = Ui::default();
        for z in [-0.025, -0.008, -0.008] {
            frame(&mut ui, finger(z));
            ui.push_enabled(false);
            assert!(!ui.button_at("Go", Vec3::ZERO, SIZE));
            ui.pop_enabled();
            end(&mut ui);
        }
    }

    #[test]
    fn test_layout_button_reserves_padded_label() {
        let mut ui = Ui::default();
        frame(&mut ui, None);
        ui.button("Hello");
        let last = ui.layout_last();
        let padding = ui.settings().padding;
        let text = ui.text_size("Hello");
        assert!((last.dimensions.x - (text.x + padding * 2.0)).abs() < 1e-6);
        end(&mut ui);
    }

    const WIDE: Vec2 = Vec2::new(0.12, 0.04);

    fn images(ui: &Ui) -> Vec<(u32, Vec3)> {
        ui.draw_commands()
            .iter()
            .filter_map(|d| match d {
                DrawCommand::Image { image, transform, .. } => Some((image.id, transform.w_axis.truncate())),
                _ => None,
            })
            .collect()
    }

    fn texts(ui: &Ui) -> Vec<Vec3> {
        ui.draw_commands()
            .iter()
            .filter_map(|d| match d {
                DrawCommand::Text { transform, .. } => Some(transform.w_axis.truncate()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_shallow_activation_needs_a_deeper_push() {
        let depth = UiSettings::default().depth;
        let shallow = 0.002;
        let mut custom = Ui::default();
        let mut standard = Ui::default();
        let custom_id = custom.stack_hash("Go");
        let standard_id = standard.stack_hash("Go");

        // 3mm from the back: past half depth, short of the shallow mark
        for (z, custom_pressed, standard_pressed) in [(-0.025, false, false), (-0.012, false, true)] {
            frame(&mut custom, finger(z));
            let outcome = custom.button_behavior_depth(Vec3::ZERO, SIZE, custom_id, depth, shallow);
            assert_eq!(outcome.state.is_just_active(), custom_pressed);
            assert!(outcome.finger_offset <= depth);
            end(&mut custom);

            frame(&mut standard, finger(z));
            let outcome = standard.button_behavior(Vec3::ZERO, SIZE, standard_id);
            assert_eq!(outcome.state.is_just_active(), standard_pressed);
            end(&mut standard);
        }

        frame(&mut custom, finger(-0.0105));
        let outcome = custom.button_behavior_depth(Vec3::ZERO, SIZE, custom_id, depth, shallow);
        assert!(outcome.state.is_just_active());
        end(&mut custom);
    }

    #[test]
    fn test_behavior_defaults_to_half_depth() {
        let depth = UiSettings::default().depth;
        let mut a = Ui::default();
        let mut b = Ui::default();
        let id = a.stack_hash("Go");
        for z in [-0.025, -0.014, -0.012, -0.008, -0.03] {
            frame(&mut a, finger(z));
            frame(&mut b, finger(z));
            let plain = a.button_behavior(Vec3::ZERO, SIZE, id);
            let explicit = b.button_behavior_depth(Vec3::ZERO, SIZE, id, depth, depth / 2.0);
            assert_eq!(plain, explicit);
            end(&mut a);
            end(&mut b);
        }
    }

    #[test]
    fn test_image_layouts_place_image_and_label() {
        let image = UiImage::new(7, 1.0);
        let mut ui = Ui::default();

        frame(&mut ui, None);
        ui.button_img_at("Play", image, ButtonLayout::Left, Vec3::ZERO, WIDE);
        let drawn = images(&ui);
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].0, 7);
        // Layout x shrinks to the right
        assert!(drawn[0].1.x > texts(&ui)[0].x);
        end(&mut ui);

        frame(&mut ui, None);
        ui.button_img_at("Play", image, ButtonLayout::Right, Vec3::ZERO, WIDE);
        assert!(images(&ui)[0].1.x < texts(&ui)[0].x);
        end(&mut ui);

        frame(&mut ui, None);
        ui.button_img_at("Play", image, ButtonLayout::Center, Vec3::ZERO, Vec2::new(0.1, 0.08));
        let center = images(&ui)[0].1;
        assert!((center.x + 0.05).abs() < 1e-6);
        assert!(texts(&ui)[0].y < center.y);
        end(&mut ui);

        frame(&mut ui, None);
        ui.button_img_at("Play", image, ButtonLayout::CenterNoText, Vec3::ZERO, WIDE);
        assert_eq!(images(&ui).len(), 1);
        assert!(texts(&ui).is_empty());
        end(&mut ui);

        frame(&mut ui, None);
        ui.button_img_at("Play", image, ButtonLayout::None, Vec3::ZERO, WIDE);
        assert!(images(&ui).is_empty());
        assert_eq!(texts(&ui).len(), 1);
        end(&mut ui);
    }

    #[test]
    fn test_image_button_presses_like_a_button() {
        let image = UiImage::new(1, 2.0);
        let mut ui = Ui::default();
        frame(&mut ui, finger(-0.025));
        assert!(!ui.button_img_at("Go", image, ButtonLayout::Left, Vec3::ZERO, SIZE));
        end(&mut ui);
        frame(&mut ui, finger(-0.008));
        assert!(ui.button_img_at("Go", image, ButtonLayout::Left, Vec3::ZERO, SIZE));
        end(&mut ui);
    }

    #[test]
    fn test_image_toggle_swaps_image() {
        let off = UiImage::new(1, 1.0);
        let on = UiImage::new(2, 1.0);
        let mut ui = Ui::default();
        let mut value = false;

        frame(&mut ui, finger(-0.025));
        ui.toggle_img_at("Mute", &mut value, off, on, ButtonLayout::Left, Vec3::ZERO, WIDE);
        assert_eq!(images(&ui)[0].0, 1);
        end(&mut ui);

        frame(&mut ui, finger(-0.008));
        assert!(ui.toggle_img_at("Mute", &mut value, off, on, ButtonLayout::Left, Vec3::ZERO, WIDE));
        assert!(value);
        assert_eq!(images(&ui)[0].0, 2);
        end(&mut ui);
    }

    #[test]
    fn test_layout_image_button_fits_image_and_label() {
        let mut ui = Ui::default();
        frame(&mut ui, None);
        ui.button_img("Play", UiImage::new(3, 2.0), ButtonLayout::Left);
        let last = ui.layout_last();
        let settings = *ui.settings();
        let text = ui.text_size("Play");
        let expected = text.x + settings.text_height * 2.0 + settings.gutter + settings.padding * 2.0;
        assert!((last.dimensions.x - expected).abs() < 1e-6);

        ui.button_img("Play", UiImage::new(3, 2.0), ButtonLayout::CenterNoText);
        let last = ui.layout_last();
        assert!((last.dimensions.x - (settings.text_height + settings.padding * 2.0)).abs() < 1e-6);
        end(&mut ui);
    }
}
