use crate::contacts::{
    contact::ContactBuilder,
    search::filter,
};
use super::create_contact;

#[test]
fn test_filter_by_name() {
    let contacts = vec![
        create_contact("1", "Ann", "Lee"),
        create_contact("2", "Bob", "Ray"),
    ];

    let result = filter(&contacts, "an");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].first_name(), "Ann");
}

#[test]
fn test_empty_query_keeps_order() {
    let contacts = vec![
        create_contact("2", "Bob", "Ray"),
        create_contact("1", "Ann", "Lee"),
        create_contact("3", "Cid", "Moe"),
    ];

    let ids: Vec<&str> = filter(&contacts, "").iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["2", "1", "3"]);

    let ids: Vec<&str> = filter(&contacts, "   ").iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["2", "1", "3"]);
}

#[test]
fn test_filter_case_and_fields() {
    let contacts = vec![
        ContactBuilder::new("1").with_first_name("Ann").with_last_name("Lee")
            .with_company("Globex").build(),
        ContactBuilder::new("2").with_first_name("Bob").with_last_name("Ray")
            .with_email("BOB@Initech.com").with_phone("555-0199").build(),
    ];

    assert_eq!(filter(&contacts, "GLOBEX")[0].id(), "1");
    assert_eq!(filter(&contacts, " initech ")[0].id(), "2");
    assert_eq!(filter(&contacts, "0199")[0].id(), "2");
    assert_eq!(filter(&contacts, "ann lee")[0].id(), "1");
    assert!(filter(&contacts, "zed").is_empty());
}

#[test]
fn test_filter_skips_absent_fields() {
    let contacts = vec![
        ContactBuilder::new("1").with_first_name("Ann").with_company("Lee").build(),
    ];

    // an absent last name must not leave a double space between the fields
    assert_eq!(filter(&contacts, "ann lee").len(), 1);
}
