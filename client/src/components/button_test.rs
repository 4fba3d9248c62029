use super::*;

#[test]
fn button_class_defaults_to_solid_regular() {
    assert_eq!(button_class(ButtonVariant::default(), ButtonSize::default(), ""), "button button--solid");
}

#[test]
fn button_class_adds_size_and_extras() {
    assert_eq!(
        button_class(ButtonVariant::Solid, ButtonSize::Large, " calculate-button "),
        "button button--solid button--lg calculate-button"
    );
    assert_eq!(button_class(ButtonVariant::Outline, ButtonSize::Default, "decline"), "button button--outline decline");
    assert_eq!(button_class(ButtonVariant::Ghost, ButtonSize::Default, ""), "button button--ghost");
}
