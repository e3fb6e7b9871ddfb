use std::collections::BTreeMap;
use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z\s'.-]*$").unwrap()
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9+\-() x]*$").unwrap()
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )).unwrap()
});

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 40;
pub const COMPANY_MAX_LEN: usize = 60;
pub const PHONE_MIN_DIGITS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Company,
    ];

    /// Property name used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName  => "lastName",
            Field::Email     => "email",
            Field::Phone     => "phone",
            Field::Company   => "company",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName  => "Last name",
            Field::Email     => "Email",
            Field::Phone     => "Phone",
            Field::Company   => "Company",
        }
    }

    fn rules(&self) -> &'static [Rule] {
        match self {
            Field::FirstName | Field::LastName => NAME_RULES,
            Field::Email    => EMAIL_RULES,
            Field::Phone    => PHONE_RULES,
            Field::Company  => COMPANY_RULES,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Reason a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Pattern,
    Email,
    PhoneMinDigits(usize),
}

impl Violation {
    pub fn tag(&self) -> &'static str {
        match self {
            Violation::Required          => "required",
            Violation::MinLength(_)      => "minlength",
            Violation::MaxLength(_)      => "maxlength",
            Violation::Pattern           => "pattern",
            Violation::Email             => "email",
            Violation::PhoneMinDigits(_) => "phoneMinDigits",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required          => write!(f, "is required"),
            Violation::MinLength(n)      => write!(f, "must be at least {} characters", n),
            Violation::MaxLength(n)      => write!(f, "must be at most {} characters", n),
            Violation::Pattern           => write!(f, "contains invalid characters"),
            Violation::Email             => write!(f, "must be a valid email address"),
            Violation::PhoneMinDigits(n) => write!(f, "must contain at least {} digits", n),
        }
    }
}

#[derive(Clone, Copy)]
enum Pattern {
    Name,
    Phone,
}

impl Pattern {
    fn regex(&self) -> &'static Regex {
        match self {
            Pattern::Name => &NAME_PATTERN,
            Pattern::Phone => &PHONE_PATTERN,
        }
    }
}

#[derive(Clone, Copy)]
enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Pattern(Pattern),
    Email,
    MinDigits(usize),
}

const NAME_RULES: &[Rule] = &[
    Rule::Required,
    Rule::MinLength(NAME_MIN_LEN),
    Rule::MaxLength(NAME_MAX_LEN),
    Rule::Pattern(Pattern::Name),
];

const EMAIL_RULES: &[Rule] = &[
    Rule::Required,
    Rule::Email,
];

const PHONE_RULES: &[Rule] = &[
    Rule::Required,
    Rule::Pattern(Pattern::Phone),
    Rule::MinDigits(PHONE_MIN_DIGITS),
];

const COMPANY_RULES: &[Rule] = &[
    Rule::Required,
    Rule::MaxLength(COMPANY_MAX_LEN),
];

impl Rule {
    // Everything except `Required` lets an empty value through.
    fn check(&self, value: &str) -> Option<Violation> {
        if value.is_empty() {
            return match self {
                Rule::Required => Some(Violation::Required),
                _ => None,
            };
        }

        let failed = match self {
            Rule::Required      => false,
            Rule::MinLength(n)  => value.chars().count() < *n,
            Rule::MaxLength(n)  => value.chars().count() > *n,
            Rule::Pattern(p)    => !p.regex().is_match(value),
            Rule::Email         => !is_email(value),
            Rule::MinDigits(n)  => {
                let trimmed = value.trim();
                !trimmed.is_empty() && trimmed.chars().filter(|c| c.is_ascii_digit()).count() < *n
            }
        };

        match failed {
            false => None,
            true => Some(match self {
                Rule::Required      => Violation::Required,
                Rule::MinLength(n)  => Violation::MinLength(*n),
                Rule::MaxLength(n)  => Violation::MaxLength(*n),
                Rule::Pattern(_)    => Violation::Pattern,
                Rule::Email         => Violation::Email,
                Rule::MinDigits(n)  => Violation::PhoneMinDigits(*n),
            })
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.len() > EMAIL_MAX_LEN {
        return false;
    }
    match value.find('@') {
        Some(pos) if pos > 0 && pos <= EMAIL_LOCAL_MAX_LEN => {},
        _ => return false,
    }
    EMAIL_PATTERN.is_match(value)
}

/// Runs every rule of `field` against `value` and returns all failures in
/// rule order. An empty result means the value is accepted.
pub fn validate(field: Field, value: &str) -> Vec<Violation> {
    field.rules()
        .iter()
        .filter_map(|rule| rule.check(value))
        .collect()
}

pub fn validate_name(value: &str) -> Vec<Violation> {
    validate(Field::FirstName, value)
}

pub fn validate_email(value: &str) -> Vec<Violation> {
    validate(Field::Email, value)
}

pub fn validate_phone(value: &str) -> Vec<Violation> {
    validate(Field::Phone, value)
}

pub fn validate_company(value: &str) -> Vec<Violation> {
    validate(Field::Company, value)
}

/// Failures collected across a whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<Field, Vec<Violation>>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn put(&mut self, field: Field, violations: Vec<Violation>) {
        if violations.is_empty() {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, violations);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> &[Violation] {
        self.errors.get(&field).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn has(&self, field: Field, tag: &str) -> bool {
        self.get(field).iter().any(|v| v.tag() == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[Violation])> {
        self.errors.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, violations) in self.iter() {
            for v in violations {
                if !first {
                    write!(f, "; ")?;
                }
                first = false;
                write!(f, "{} {}", field.label(), v)?;
            }
        }
        Ok(())
    }
}
