use crate::client::ClientFields;
use crate::clinic_service::ServiceFields;
use crate::errors::ModelError;
use crate::invoice::InvoiceFields;
use crate::product::ProductFields;
use crate::validation;

fn is_validation<T: std::fmt::Debug>(r: Result<T, ModelError>) -> bool {
    matches!(r, Err(ModelError::Validation(_)))
}

#[test]
fn client_whitelist_accepts_letters_digits_underscore_space() {
    assert!(ClientFields::new("Ana_Maria 2", "5550101", "Calle 5 Norte").validate().is_ok());
}

#[test]
fn client_whitelist_rejects_punctuation() {
    assert!(is_validation(ClientFields::new("Ana", "555-0101", "Calle 5").validate()));
    assert!(is_validation(ClientFields::new("Ana", "555", "Calle 5, Norte").validate()));
    assert!(is_validation(ClientFields::new("José", "555", "Calle").validate()));
}

#[test]
fn client_requires_name_but_not_phone_or_address() {
    assert!(is_validation(ClientFields::new("  ", "555", "Calle").validate()));
    assert!(ClientFields::new("Ana", "", "").validate().is_ok());
}

#[test]
fn product_parse_requires_both_inputs() {
    assert!(is_validation(ProductFields::parse("", "10")));
    assert!(is_validation(ProductFields::parse("Collar", "")));
    assert!(is_validation(ProductFields::parse("Collar", "ten")));
    let ok = ProductFields::parse(" Collar ", " 9.75 ").unwrap();
    assert_eq!(ok, ProductFields::new("Collar", 9.75));
}

#[test]
fn product_names_have_no_character_whitelist() {
    assert!(ProductFields::parse("Collar (red), size-M", "9").is_ok());
}

#[test]
fn amounts_may_be_negative_but_must_be_numbers() {
    assert!(ServiceFields::new("Bath", -1.0).validate().is_ok());
    assert!(ServiceFields::new("Bath", 0.0).validate().is_ok());
    assert!(is_validation(ServiceFields::new("Bath", f64::NAN).validate()));
    assert!(is_validation(ServiceFields::new("Bath", f64::INFINITY).validate()));

    assert_eq!(ProductFields::parse("Refund", "-5").unwrap().price, -5.0);
    assert!(is_validation(ProductFields::parse("Collar", "inf")));
    assert_eq!(InvoiceFields::parse("3", "-12.5").unwrap().total_amount, -12.5);
}

#[test]
fn invoice_parse_requires_client_and_total() {
    assert!(is_validation(InvoiceFields::parse("", "10")));
    assert!(is_validation(InvoiceFields::parse("abc", "10")));
    assert!(is_validation(InvoiceFields::parse("0", "10")));
    assert!(is_validation(InvoiceFields::parse("3", "")));
    let inv = InvoiceFields::parse("3", "45.5").unwrap();
    assert_eq!(inv.client_id, 3);
    assert_eq!(inv.total_amount, 45.5);
    assert_eq!(inv.date, chrono::Utc::now().date_naive());
}

#[test]
fn parse_date_expects_iso_format() {
    assert!(validation::parse_date("start date", "2024-02-29").is_ok());
    assert!(is_validation(validation::parse_date("start date", "29/02/2024")));
    assert!(is_validation(validation::parse_date("start date", "")));
}
