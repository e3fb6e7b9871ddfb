use crate::contacts::validators::{
    self,
    Field,
    Violation,
    validate,
    validate_name,
    validate_email,
    validate_phone,
    validate_company,
};

#[test]
fn test_valid_names() {
    for name in ["John", "O'Brien", "Anne-Marie", "Jr.", "Mary Ann", "Al"] {
        assert!(validate_name(name).is_empty(), "{name} should pass");
    }
}

#[test]
fn test_invalid_names() {
    assert_eq!(validate_name("1John"), vec![Violation::Pattern]);
    assert_eq!(validate_name(""), vec![Violation::Required]);
    assert_eq!(validate_name("J"), vec![Violation::MinLength(2)]);
    assert_eq!(validate_name("-John"), vec![Violation::Pattern]);
    assert_eq!(validate_name("Jo3n"), vec![Violation::Pattern]);
    assert_eq!(validate_name(" John"), vec![Violation::Pattern]);
}

#[test]
fn test_name_length_bounds() {
    let max = "a".repeat(validators::NAME_MAX_LEN);
    assert!(validate_name(&max).is_empty());

    let long = "a".repeat(validators::NAME_MAX_LEN + 1);
    assert_eq!(validate_name(&long), vec![Violation::MaxLength(40)]);

    // every failing rule is reported
    let bad = format!("1{}", "a".repeat(45));
    assert_eq!(validate_name(&bad), vec![Violation::MaxLength(40), Violation::Pattern]);
}

#[test]
fn test_last_name_uses_name_rules() {
    assert_eq!(validate(Field::LastName, "J"), vec![Violation::MinLength(2)]);
    assert!(validate(Field::LastName, "Smith").is_empty());
}

#[test]
fn test_email() {
    for email in ["a@b", "ann@example.com", "first.last+tag@sub.example.co", "x_y@a-b.io"] {
        assert!(validate_email(email).is_empty(), "{email} should pass");
    }

    assert_eq!(validate_email(""), vec![Violation::Required]);
    for email in ["ann", "ann@", "@example.com", "ann@@example.com", "ann@-example.com",
        "ann@example-.com", "ann.@example.com", "an n@example.com", "ann@example..com"] {
        assert_eq!(validate_email(email), vec![Violation::Email], "{email} should fail");
    }

    let local = "a".repeat(65);
    assert_eq!(validate_email(&format!("{local}@example.com")), vec![Violation::Email]);

    let label = "a".repeat(64);
    assert_eq!(validate_email(&format!("ann@{label}.com")), vec![Violation::Email]);

    let domain = vec!["a".repeat(60); 5].join(".");
    assert_eq!(validate_email(&format!("ann@{domain}")), vec![Violation::Email]);
}

#[test]
fn test_phone() {
    assert!(validate_phone("555-1234").is_empty());
    assert!(validate_phone("+1 (555) 123-4567 x89").is_empty());

    let result = validate_phone("12345");
    assert_eq!(result, vec![Violation::PhoneMinDigits(7)]);
    assert_eq!(result[0].tag(), "phoneMinDigits");

    let result = validate_phone("abc");
    assert!(result.contains(&Violation::Pattern));

    assert_eq!(validate_phone(""), vec![Violation::Required]);
    assert_eq!(validate_phone("555.1234"), vec![Violation::Pattern]);
    assert_eq!(validate_phone("() - +"), vec![Violation::PhoneMinDigits(7)]);
}

#[test]
fn test_company() {
    assert!(validate_company("Acme").is_empty());
    assert!(validate_company(&"c".repeat(60)).is_empty());
    assert_eq!(validate_company(&"c".repeat(61)), vec![Violation::MaxLength(60)]);
    assert_eq!(validate_company(""), vec![Violation::Required]);
}

#[test]
fn test_violation_tags() {
    assert_eq!(Violation::Required.tag(), "required");
    assert_eq!(Violation::MinLength(2).tag(), "minlength");
    assert_eq!(Violation::MaxLength(40).tag(), "maxlength");
    assert_eq!(Violation::Pattern.tag(), "pattern");
    assert_eq!(Violation::Email.tag(), "email");
    assert_eq!(Violation::PhoneMinDigits(7).to_string(), "must contain at least 7 digits");
}

#[test]
fn test_field_names() {
    let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["firstName", "lastName", "email", "phone", "company"]);
}
