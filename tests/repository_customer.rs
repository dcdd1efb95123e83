use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use projects_api::domain::entities::{CustomerPatch, NewCustomer};
use projects_api::domain::listing::{ListQuery, Sort, SortDirection};
use projects_api::domain::repositories::CustomerRepository;
use projects_api::infrastructure::persistence::PgCustomerRepository;

fn new_customer(name: &str) -> NewCustomer {
    NewCustomer {
        name: name.to_string(),
        date_of_birth: None,
        email: None,
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_create_customer(pool: PgPool) {
    let repo = PgCustomerRepository::new(Arc::new(pool));

    let customer = repo
        .create(NewCustomer {
            name: "Ada Lovelace".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1815, 12, 10),
            email: Some("ada@example.com".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(customer.name, "Ada Lovelace");
    assert_eq!(customer.date_of_birth, NaiveDate::from_ymd_opt(1815, 12, 10));
    assert_eq!(
        repo.find_by_id(customer.id).await.unwrap(),
        Some(customer)
    );
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_list_and_count(pool: PgPool) {
    let repo = PgCustomerRepository::new(Arc::new(pool));
    for name in ["Grace", "Ada", "Barbara"] {
        repo.create(new_customer(name)).await.unwrap();
    }

    let query = ListQuery::new(1, 2, Some(Sort::new("name", SortDirection::Asc)));
    let names: Vec<String> = repo
        .list(&query)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, ["Ada", "Barbara"]);
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_update_and_clear_fields(pool: PgPool) {
    let repo = PgCustomerRepository::new(Arc::new(pool));
    let customer = repo
        .create(NewCustomer {
            email: Some("ada@example.com".to_string()),
            ..new_customer("Ada")
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            customer.id,
            CustomerPatch {
                date_of_birth: Some(NaiveDate::from_ymd_opt(1815, 12, 10)),
                email: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.email, None);
    assert!(updated.date_of_birth.is_some());

    assert!(repo.update(999, CustomerPatch::default()).await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_delete_customer(pool: PgPool) {
    let repo = PgCustomerRepository::new(Arc::new(pool));
    let customer = repo.create(new_customer("Ada")).await.unwrap();

    assert!(repo.delete(customer.id).await.unwrap());
    assert!(!repo.delete(customer.id).await.unwrap());
    assert!(repo.find_by_id(customer.id).await.unwrap().is_none());
}
