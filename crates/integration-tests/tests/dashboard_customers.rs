//! Integration tests for the customers page.

#![allow(clippy::unwrap_used)]

use backoffice_admin::models::CustomerForm;
use backoffice_admin::{Submitted, pages::CustomersPage};
use backoffice_integration_tests::TestContext;

fn seed(page: &mut CustomersPage) {
    for (name, email, gender, country) in [
        ("Diana", "diana@shop.id", "female", "Indonesia"),
        ("Bella", "bella@shop.id", "female", ""),
        ("Rina", "rina@Anime.jp", "female", "Japan"),
        ("Andi", "andi@shop.id", "male", "Indonesia"),
        ("Joko", "joko@shop.id", "male", ""),
    ] {
        page.submit(CustomerForm::new(name, email, gender).with_country(country))
            .unwrap();
    }
}

fn names(page: &CustomersPage) -> Vec<String> {
    page.filtered().iter().map(|c| c.name.clone()).collect()
}

#[test]
fn test_gender_and_query_scenario() {
    let ctx = TestContext::in_memory();
    let mut dashboard = ctx.open();
    let customers = dashboard.customers_mut();
    seed(customers);

    customers.set_predicate("gender", "female");
    customers.set_query("an");
    assert_eq!(names(customers), vec!["Diana", "Rina"]);

    customers.set_predicate("gender", "male");
    assert_eq!(names(customers), vec!["Andi"]);

    customers.set_query("");
    customers.set_predicate("gender", "all");
    assert_eq!(names(customers).len(), 5);
}

#[test]
fn test_filter_change_resets_page() {
    let ctx = TestContext::in_memory().page_size(2);
    let mut dashboard = ctx.open();
    let customers = dashboard.customers_mut();
    seed(customers);

    customers.set_page(2);
    assert_eq!(customers.current_items().len(), 1);

    customers.set_predicate("gender", "female");
    assert_eq!(customers.page_index(), 0);
    assert_eq!(customers.current_items().len(), 2);
    assert!(customers.page_info().has_next_page);
}

#[test]
fn test_declined_delete_keeps_record() {
    let ctx = TestContext::in_memory();
    let mut dashboard = ctx.open();
    let customers = dashboard.customers_mut();

    let Submitted::Created(diana) = customers
        .submit(CustomerForm::new("Diana", "diana@shop.id", "female"))
        .unwrap()
    else {
        panic!("expected a created customer");
    };

    ctx.answer(false);
    assert!(customers.request_delete(diana.id).unwrap().is_none());
    assert_eq!(customers.records().len(), 1);
    assert_eq!(dashboard.activity().len(), 1);
    assert!(ctx.dialog.notifications().iter().all(|(title, _)| title != "Deleted!"));
}

#[test]
fn test_notifications() {
    let ctx = TestContext::in_memory();
    let mut dashboard = ctx.open();
    let customers = dashboard.customers_mut();

    let Submitted::Created(diana) = customers
        .submit(CustomerForm::new("Diana", "diana@shop.id", "female"))
        .unwrap()
    else {
        panic!("expected a created customer");
    };
    ctx.answer(true);
    customers.request_edit(diana.id).unwrap();
    let form = customers.form().clone();
    customers.submit(form).unwrap();
    ctx.answer(true);
    customers.request_delete(diana.id).unwrap();

    let titles: Vec<_> = ctx
        .dialog
        .notifications()
        .into_iter()
        .map(|(title, message)| format!("{title} {message}"))
        .collect();
    assert_eq!(
        titles,
        vec![
            "Added New customer has been added.",
            "Editing You can now update the data.",
            "Updated Customer has been updated.",
            "Deleted! Data has been deleted.",
        ]
    );
}
