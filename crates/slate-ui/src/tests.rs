//! Tests for the widget system.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use slate_ui_raster::{Color, Point, Surface};

    use crate::{
        AbstractButton, FrameEvents, InputEvent, Label, PointerButton, Renderable, TextButton,
        Widget, WidgetBase, WidgetError,
    };

    fn release() -> InputEvent {
        InputEvent::ButtonReleased(PointerButton::Left)
    }

    fn press() -> InputEvent {
        InputEvent::ButtonPressed(PointerButton::Left)
    }

    fn white_label(width: u32, height: u32) -> Label {
        Label::builder(width, height)
            .with_background_color(Color::WHITE)
            .build()
            .unwrap()
    }

    // =========================================================================
    // Dirty-flag lifecycle
    // =========================================================================

    #[test]
    fn test_changed_true_until_first_consumed_recompose() {
        let mut label = white_label(100, 40);
        assert!(label.is_changed());

        label.render();
        assert!(!label.is_changed());
    }

    #[test]
    fn test_fresh_and_recomposed_renders_are_pixel_identical() {
        let mut once = white_label(100, 40);
        let mut twice = white_label(100, 40);

        let first = once.render().clone();
        twice.render();
        twice.recompose();
        let second = twice.render().clone();

        assert_eq!(first, second);
    }

    #[test]
    fn test_recompose_is_idempotent() {
        let mut label = white_label(100, 40);
        label.set_text("abc").unwrap();

        label.recompose();
        let after_one = label.base().surface().clone();
        label.recompose();
        let after_two = label.base().surface().clone();

        assert_eq!(after_one, after_two);
    }

    #[test]
    fn test_set_text_marks_stale_and_render_consumes() {
        let mut label = white_label(100, 40);
        label.render();
        assert!(!label.is_changed());

        label.set_text("hi").unwrap();
        assert!(label.is_changed());

        label.render();
        assert!(!label.is_changed());
    }

    // =========================================================================
    // Text assignment
    // =========================================================================

    #[test]
    fn test_fitting_text_round_trips() {
        let mut label = white_label(300, 40);
        for text in ["a", "hello", "hello world", ""] {
            label.set_text(text).unwrap();
            assert_eq!(label.text(), text);
        }
    }

    #[test]
    fn test_oversize_assignment_is_transactional() {
        let mut label = white_label(60, 40);
        label.set_text("ok").unwrap();
        let before = label.render().clone();

        let err = label.set_text("this string cannot possibly fit").unwrap_err();
        assert!(matches!(err, WidgetError::TextOversize { .. }));

        // Previous text and pixels are fully intact.
        assert_eq!(label.text(), "ok");
        assert!(!label.is_changed());
        assert_eq!(label.render(), &before);
    }

    #[test]
    fn test_oversize_in_either_dimension() {
        // Wide enough but too short for the default 20px font.
        let mut short = Label::builder(300, 10)
            .with_background_color(Color::WHITE)
            .build()
            .unwrap();
        assert!(matches!(
            short.set_text("a"),
            Err(WidgetError::TextOversize { .. })
        ));
    }

    // =========================================================================
    // Incremental erase
    // =========================================================================

    #[test]
    fn test_erase_leaves_no_residual_glyphs() {
        let mut direct = white_label(200, 40);
        direct.set_text("AB").unwrap();
        let expected = direct.render().clone();

        let mut stepped = white_label(200, 40);
        stepped.set_text("AB").unwrap();
        stepped.render();
        stepped.set_text("A").unwrap();
        stepped.render();
        stepped.set_text("AB").unwrap();

        assert_eq!(stepped.render(), &expected);
    }

    #[test]
    fn test_erase_after_multiple_changes_between_frames() {
        let mut direct = white_label(200, 40);
        direct.set_text("A").unwrap();
        let expected = direct.render().clone();

        // Only the text actually painted gets erased, not every
        // intermediate assignment.
        let mut stepped = white_label(200, 40);
        stepped.set_text("ABCDE").unwrap();
        stepped.render();
        stepped.set_text("XYZ").unwrap();
        stepped.set_text("A").unwrap();

        assert_eq!(stepped.render(), &expected);
    }

    #[test]
    fn test_clearing_text_restores_background() {
        let mut blank = white_label(120, 40);
        let expected = blank.render().clone();

        let mut label = white_label(120, 40);
        label.set_text("gone").unwrap();
        label.render();
        label.set_text("").unwrap();

        assert_eq!(label.render(), &expected);
    }

    // =========================================================================
    // Button activation
    // =========================================================================

    fn counting_button(counter: &Arc<AtomicUsize>) -> AbstractButton {
        let sink = Arc::clone(counter);
        AbstractButton::builder(40, 20)
            .with_action(move || {
                sink.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_hovered_button_activates_once_per_update() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut button = counting_button(&counter);
        button.set_hovered(true);

        let mut frame = FrameEvents::new();
        frame.record(button.id(), release());

        button.update(&frame);
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        button.update(&frame);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unhovered_button_never_activates() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut button = counting_button(&counter);

        let mut frame = FrameEvents::new();
        frame.record(button.id(), release());
        frame.record(button.id(), press());

        button.update(&frame);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_non_trigger_events_are_ignored() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut button = counting_button(&counter);
        button.set_hovered(true);

        let mut frame = FrameEvents::new();
        frame.record(button.id(), press());
        frame.record(button.id(), InputEvent::ButtonReleased(PointerButton::Right));

        button.update(&frame);
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_button_without_action_is_silent() {
        let mut button = AbstractButton::builder(40, 20).build().unwrap();
        button.set_hovered(true);

        let signals = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&signals);
        button.activated().connect(move |()| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        let mut frame = FrameEvents::new();
        frame.record(button.id(), release());
        button.update(&frame);

        // No action, no panic; the signal still fires.
        assert_eq!(signals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_custom_trigger_set() {
        let counter = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&counter);
        let mut button = AbstractButton::builder(40, 20)
            .with_action(move || {
                sink.fetch_add(1, Ordering::SeqCst);
            })
            .with_triggers(vec![press()])
            .build()
            .unwrap();
        button.set_hovered(true);

        let mut frame = FrameEvents::new();
        frame.record(button.id(), release());
        button.update(&frame);
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        frame.record(button.id(), press());
        button.update(&frame);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    // =========================================================================
    // Construction conflicts
    // =========================================================================

    #[test]
    fn test_surface_and_image_conflict_in_all_variants() {
        for alpha in [true, false] {
            let surface = Surface::new(10, 10).unwrap();
            let result = WidgetBase::builder(10, 10)
                .with_surface(surface)
                .with_image("assets/icon.png")
                .with_alpha(alpha)
                .build();
            assert!(matches!(result, Err(WidgetError::ArgumentConflict)));

            let surface = Surface::new(10, 10).unwrap();
            let result = AbstractButton::builder(10, 10)
                .with_surface(surface)
                .with_image("assets/icon.png")
                .with_alpha(alpha)
                .build();
            assert!(matches!(result, Err(WidgetError::ArgumentConflict)));
        }
    }

    // =========================================================================
    // TextButton capability composition
    // =========================================================================

    #[test]
    fn test_text_button_shares_one_widget_state() {
        let mut button = TextButton::builder(120, 32)
            .with_background_color(Color::WHITE)
            .with_text("OK")
            .build()
            .unwrap();

        // One identity across both facets.
        assert_eq!(Widget::id(&button), button.label().base().id());

        // One hover flag.
        button.set_hovered(true);
        assert!(button.label().base().is_hovered());

        // One dirty flag: text mutation through the button facet is seen
        // by the widget facet, and rendering consumes it for both.
        button.render();
        button.set_text("Go").unwrap();
        assert!(button.is_changed());
        button.render();
        assert!(!button.is_changed());
        assert_eq!(button.text(), "Go");
    }

    #[test]
    fn test_text_button_renders_like_equivalent_label() {
        let mut label = Label::builder(120, 32)
            .with_background_color(Color::BLUE)
            .with_text_color(Color::WHITE)
            .with_text("Go")
            .build()
            .unwrap();

        let mut button = TextButton::builder(120, 32)
            .with_background_color(Color::BLUE)
            .with_text_color(Color::WHITE)
            .with_text("Go")
            .build()
            .unwrap();

        assert_eq!(label.render(), button.render());
    }

    #[test]
    fn test_text_button_activation_and_rendering_do_not_conflict() {
        let counter = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&counter);
        let mut button = TextButton::builder(120, 32)
            .with_background_color(Color::WHITE)
            .with_text("OK")
            .with_action(move || {
                sink.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();

        button.render();
        button.set_hovered(true);

        let mut frame = FrameEvents::new();
        frame.record(button.id(), release());
        button.update(&frame);

        // Activation fired and did not dirty the surface.
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(!button.is_changed());
    }

    // =========================================================================
    // Generic container driver
    // =========================================================================

    #[test]
    fn test_driver_treats_widgets_uniformly() {
        let counter = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&counter);

        let label = white_label(100, 40);
        let button = TextButton::builder(100, 40)
            .with_background_color(Color::GREEN)
            .with_text("Run")
            .with_action(move || {
                sink.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();
        let button_id = Widget::id(&button);

        let mut widgets: Vec<(Box<dyn Renderable>, Point)> = vec![
            (Box::new(label), Point::new(0, 0)),
            (Box::new(button), Point::new(0, 60)),
        ];

        let mut frame_buffer = Surface::new(320, 240).unwrap();

        // Frame 1: the pointer releases over the button.
        let mut frame = FrameEvents::new();
        frame.record(button_id, release());
        for (widget, position) in widgets.iter_mut() {
            widget.set_hovered(widget.id() == button_id);
            widget.update(&frame);
            if widget.is_changed() {
                let surface = widget.render().clone();
                frame_buffer.blit(&surface, *position);
            }
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);

        // Frame 2: nothing changed, nothing re-blits.
        frame.clear();
        for (widget, _) in widgets.iter_mut() {
            widget.update(&frame);
            assert!(!widget.is_changed());
        }
    }
}
