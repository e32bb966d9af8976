use crate::username;

#[test]
fn given_generator_when_called_then_produces_name_with_number_suffix() {
    let name = username::generate();

    assert!(!name.is_empty());
    let digits: String = name.chars().filter(|c| c.is_ascii_digit()).collect();
    let number: u16 = digits.parse().expect("name should end with digits");
    assert!((1..=999).contains(&number));
}

#[test]
fn given_generator_when_called_then_starts_with_letter() {
    let name = username::generate();

    assert!(name.chars().next().unwrap().is_ascii_uppercase());
}
