use super::*;

#[test]
fn tel_uri_uses_the_literal_contact_number() {
    assert_eq!(CONTACT_PHONE, "9902299331");
    assert_eq!(tel_uri(CONTACT_PHONE), "tel:9902299331");
}

#[test]
fn tel_uri_strips_formatting() {
    assert_eq!(tel_uri("+91 99022-99331"), "tel:+919902299331");
    assert_eq!(tel_uri("(990) 229 9331"), "tel:9902299331");
}
