//! Whole-frame scenarios driven through the public API

use glam::{Quat, Vec2, Vec3};
use spatial_ui::{
    Bounds, Confirm, FrameInput, HandInput, Handed, IdHash, InteractorId, MoveType, NullAudioBackend,
    NullKeyboardBackend, NullRenderBackend, PointerInput, Pose, Ray, TextContext, TextEvent, Ui,
    UiGesture, UiSound, WindowStyle,
};

const BUTTON: Vec2 = Vec2::new(0.1, 0.04);
const FIELD: Vec2 = Vec2::new(0.2, 0.04);

fn tracked(at: Vec3, pinched: bool) -> HandInput {
    HandInput {
        pinched,
        ..HandInput::tracked_at(at)
    }
}

fn input(left: Option<HandInput>, right: Option<HandInput>) -> FrameInput {
    let mut input = FrameInput::default();
    if let Some(hand) = left {
        input.hands[Handed::Left.index()] = hand;
    }
    if let Some(hand) = right {
        input.hands[Handed::Right.index()] = hand;
    }
    input
}

/// Right-hand ray from `origin` straight along +Z, with hands untracked
fn ray_input(origin: Vec3, pressed: bool) -> FrameInput {
    let mut input = FrameInput::default();
    input.pointers[Handed::Right.index()] = PointerInput {
        tracked: true,
        ray: Ray::new(origin, Vec3::Z),
        orientation: Quat::IDENTITY,
        pressed,
    };
    input
}

fn end(ui: &mut Ui) {
    ui.end_frame(&mut NullRenderBackend, &mut NullAudioBackend, &mut NullKeyboardBackend);
}

fn focused(ui: &Ui, id: InteractorId) -> IdHash {
    ui.interactors().get(id).focused
}

#[test]
fn test_button_press_fires_once() {
    let mut ui = Ui::default();
    let mut presses = 0;
    let mut sounds: Vec<(UiSound, Vec3)> = Vec::new();

    for z in [-0.025, -0.015, -0.008, -0.008, -0.008] {
        ui.begin_frame(&input(None, Some(tracked(Vec3::new(-0.05, -0.02, z), false))));
        if ui.button_at("Go", Vec3::ZERO, BUTTON) {
            presses += 1;
        }
        ui.end_frame(&mut NullRenderBackend, &mut sounds, &mut NullKeyboardBackend);
    }

    assert_eq!(presses, 1);
    assert_eq!(sounds.len(), 1);
    assert_eq!(sounds[0].0, UiSound::Interact);
}

#[test]
fn test_ray_select_presses_button_once() {
    let mut ui = Ui::default();
    let mut presses = 0;
    let mut sounds: Vec<(UiSound, Vec3)> = Vec::new();
    let origin = Vec3::new(-0.05, -0.02, -0.5);

    for pressed in [false, true, true, true, false] {
        ui.begin_frame(&ray_input(origin, pressed));
        if ui.button_at("Go", Vec3::ZERO, BUTTON) {
            presses += 1;
        }
        assert_eq!(focused(&ui, InteractorId::RIGHT_RAY), ui.stack_hash("Go"));
        ui.end_frame(&mut NullRenderBackend, &mut sounds, &mut NullKeyboardBackend);
    }

    assert_eq!(presses, 1);
    let kinds: Vec<UiSound> = sounds.iter().map(|(sound, _)| *sound).collect();
    assert_eq!(kinds, vec![UiSound::Interact, UiSound::Uninteract]);
}

#[test]
fn test_ray_beyond_reach_never_presses() {
    let mut ui = Ui::default();
    let origin = Vec3::new(-0.05, -0.02, -150.0);

    for pressed in [false, true, true, false] {
        ui.begin_frame(&ray_input(origin, pressed));
        assert!(!ui.button_at("Go", Vec3::ZERO, BUTTON));
        assert_eq!(focused(&ui, InteractorId::RIGHT_RAY), IdHash::NONE);
        end(&mut ui);
    }
}

#[test]
fn test_second_hand_with_worse_claim_is_denied() {
    let mut ui = Ui::default();
    let left_at = Vec3::new(-0.03, -0.02, -0.025);
    let right_at = Vec3::new(-0.07, -0.02, -0.025);
    let pad = Bounds::new(left_at, Vec3::splat(0.02));

    // Both fingers hover in front of the button, but the left one is also
    // resting in a hot zone that claims it more strongly
    ui.begin_frame(&input(Some(tracked(left_at, false)), Some(tracked(right_at, false))));
    ui.volume_at("pad", pad);
    ui.button_at("Go", Vec3::ZERO, BUTTON);
    let pad_id = ui.stack_hash("pad");
    let button_id = ui.stack_hash("Go");
    assert_eq!(focused(&ui, InteractorId::LEFT_HAND), pad_id);
    assert_eq!(focused(&ui, InteractorId::RIGHT_HAND), button_id);
    end(&mut ui);

    // The right finger pushes through while the left keeps its zone
    let pressed_at = Vec3::new(-0.07, -0.02, -0.008);
    ui.begin_frame(&input(Some(tracked(left_at, false)), Some(tracked(pressed_at, false))));
    ui.volume_at("pad", pad);
    assert!(ui.button_at("Go", Vec3::ZERO, BUTTON));
    assert_eq!(focused(&ui, InteractorId::LEFT_HAND), pad_id);
    assert!(ui.interactors().get(InteractorId::LEFT_HAND).active.is_none());
    assert_eq!(ui.interactors().get(InteractorId::RIGHT_HAND).active, button_id);
    end(&mut ui);
}

#[test]
fn test_lower_priority_wins_and_ties_go_to_the_later_call() {
    let mut ui = Ui::default();
    let at = Vec3::new(0.0, 0.0, -0.02);
    ui.begin_frame(&input(None, Some(tracked(at, false))));

    // Centered on the finger, then off to one side: the centered one is
    // the better claim even though it ran first
    ui.volumei_at("centered", Bounds::new(at, Vec3::splat(0.05)), Confirm::Push);
    ui.volumei_at(
        "offset",
        Bounds::new(at + Vec3::new(0.02, 0.0, 0.0), Vec3::splat(0.05)),
        Confirm::Push,
    );
    assert_eq!(focused(&ui, InteractorId::RIGHT_HAND), ui.stack_hash("centered"));
    end(&mut ui);

    // Hot zones all claim at priority 0, so the last one issued wins
    let mut ui = Ui::default();
    ui.begin_frame(&input(None, Some(tracked(at, false))));
    let zone = Bounds::new(at, Vec3::splat(0.05));
    ui.volume_at("first", zone);
    ui.volume_at("second", zone);
    assert_eq!(focused(&ui, InteractorId::RIGHT_HAND), ui.stack_hash("second"));
    end(&mut ui);
}

#[test]
fn test_text_edit_scenario() {
    let mut ui = Ui::default();
    let mut text = String::from("abc");

    ui.begin_frame(&input(None, Some(tracked(Vec3::new(-0.05, -0.02, -0.005), false))));
    ui.queue_text(TextEvent::Char('d'));
    ui.queue_text(TextEvent::Backspace);
    ui.queue_text(TextEvent::Backspace);
    ui.input("field", &mut text, FIELD, TextContext::Text);
    assert_eq!(text, "ab");
    end(&mut ui);

    // The caret sits after "ab": one step left lands between a and b
    ui.begin_frame(&input(None, None));
    ui.queue_text(TextEvent::Left { extend: false });
    ui.queue_text(TextEvent::Char('X'));
    ui.input("field", &mut text, FIELD, TextContext::Text);
    assert_eq!(text, "aXb");
    end(&mut ui);
}

fn keyboard_handoff(preserve: bool) -> bool {
    let mut ui = Ui::default();
    let mut text = String::new();
    let field_at = Vec3::new(-0.05, -0.02, -0.005);
    let button_pos = Vec3::new(0.0, -0.1, 0.0);
    let frames = [
        Some(tracked(field_at, false)),
        None,
        Some(tracked(Vec3::new(-0.05, -0.12, -0.025), false)),
        Some(tracked(Vec3::new(-0.05, -0.12, -0.008), false)),
        Some(tracked(Vec3::new(-0.05, -0.12, -0.008), false)),
    ];

    for right in frames {
        ui.begin_frame(&input(None, right));
        ui.input("field", &mut text, FIELD, TextContext::Text);
        ui.push_preserve_keyboard(preserve);
        ui.button_at("Other", button_pos, BUTTON);
        ui.pop_preserve_keyboard();
        end(&mut ui);
    }
    ui.has_keyboard_focus()
}

#[test]
fn test_pressing_elsewhere_takes_the_keyboard_unless_preserved() {
    assert!(!keyboard_handoff(false));
    assert!(keyboard_handoff(true));
}

#[test]
fn test_two_hand_release_rebaselines_without_pop() {
    let mut ui = Ui::default();
    let mut pose = Pose::IDENTITY;
    let bounds = Bounds::new(Vec3::ZERO, Vec3::splat(0.1));
    let left = Vec3::new(-0.03, 0.0, 0.0);
    let right = Vec3::new(0.03, 0.0, 0.0);
    let shift = Vec3::new(0.02, 0.0, 0.0);

    let mut frame = |pose: &mut Pose, l: HandInput, r: HandInput| {
        ui.begin_frame(&input(Some(l), Some(r)));
        let held = ui.handle_begin("grab", pose, bounds, true, MoveType::Exact, UiGesture::PINCH);
        ui.handle_end();
        end(&mut ui);
        held
    };

    assert!(!frame(&mut pose, tracked(left, false), tracked(right, false)));
    assert!(frame(&mut pose, tracked(left, true), tracked(right, true)));
    assert!(pose.position.length() < 1e-6);

    // Both hands move together: the handle follows their midpoint
    frame(&mut pose, tracked(left + shift, true), tracked(right + shift, true));
    assert!((pose.position.x - 0.012).abs() < 1e-5);

    // The left hand lets go; this frame still blends toward the old midpoint
    frame(&mut pose, tracked(left + shift, false), tracked(right + shift, true));
    assert!((pose.position.x - 0.0168).abs() < 1e-5);

    // The right hand holds still: no jump back toward its original grab
    let before = pose.position;
    assert!(frame(&mut pose, tracked(left + shift, false), tracked(right + shift, true)));
    assert!((pose.position - before).length() < 1e-5);
}

#[test]
fn test_layout_wraps_exactly_at_width() {
    let mut ui = Ui::default();
    ui.begin_frame(&FrameInput::default());
    let gutter = ui.settings().gutter;
    let slot = Vec2::new(0.05, 0.02);
    let width = slot.x * 3.0 + gutter * 2.0;
    ui.layout_push(Vec3::ZERO, Vec2::new(width, 0.0), false);

    let mut tops = Vec::new();
    for i in 0..4 {
        let bounds = ui.layout_reserve(slot, false, 0.0);
        tops.push(bounds.top_left());
        ui.same_line();
        if i == 1 {
            assert!((ui.layout_remaining().x - (width - 2.0 * (slot.x + gutter))).abs() < 1e-6);
        }
    }
    ui.layout_pop();

    // Three fit on the first row, the fourth starts a new one
    assert!(tops[..3].iter().all(|t| t.y.abs() < 1e-6));
    assert!((tops[2].x + 2.0 * (slot.x + gutter)).abs() < 1e-6);
    assert!(tops[3].x.abs() < 1e-6);
    assert!((tops[3].y + slot.y + gutter).abs() < 1e-6);
    end(&mut ui);
}

#[test]
fn test_window_content_lives_in_window_space() {
    let mut ui = Ui::default();
    let home = Pose::at(Vec3::new(0.0, 0.0, -0.5));
    let mut pose = home;
    let margin = ui.settings().margin;

    // The first frame only measures; after that the content is centered
    // on the window pose, so the button's middle sits on the pose's x
    let finger = |z: f32| tracked(Vec3::new(0.0, -margin - BUTTON.y / 2.0, -0.5 + z), false);
    let mut pressed = false;
    for right in [None, Some(finger(-0.025)), Some(finger(-0.008))] {
        ui.begin_frame(&input(None, right));
        ui.window_begin("Panel", &mut pose, Vec2::ZERO, WindowStyle::Body, MoveType::None);
        pressed |= ui.button_sz("Inside", BUTTON);
        ui.window_end();
        end(&mut ui);
    }
    assert!(pressed);
    assert_eq!(pose, home);
}
