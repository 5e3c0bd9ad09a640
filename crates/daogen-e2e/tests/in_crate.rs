// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DAOs compiled inside the crate that declares the models.

use daogen_core::{Row, Value, mock::MockPool};
use daogen_e2e::{dao, models};

const LOCAL_USER: &str = include_str!(concat!(env!("OUT_DIR"), "/local/postgres/user_dao.rs"));

#[test]
fn local_tree_names_models_through_crate() {
    assert!(LOCAL_USER.contains("pub use crate::models::User;"));
    assert!(!LOCAL_USER.contains("daogen_e2e::"));
}

#[tokio::test]
async fn local_dao_works_with_the_model_type() {
    let pool = MockPool::new();
    let dao = dao::user::UserDao::new(pool.clone());
    let ada = models::User {
        id:    1,
        name:  "Ada".into(),
        email: None
    };

    dao.create(None, &ada).await.unwrap();
    pool.push_rows(vec![Row::new(vec![Value::Int(1), Value::Text("Ada".into()), Value::Null])]);
    let found: Option<models::User> = dao.find_by_pk(None, &1).await.unwrap();

    assert_eq!(found, Some(ada));
    assert_eq!(
        pool.statements()[0].sql,
        "INSERT INTO users (id, name, email) VALUES ($1, $2, $3)"
    );
}

#[tokio::test]
async fn local_session_dao_builds_through_default() {
    let pool = MockPool::new();
    pool.push_rows(vec![Row::new(vec![Value::Text("t1".into()), Value::Int(9)])]);
    let dao = dao::session::SessionDao::new(pool.clone());

    let session = dao.find_by_pk(None, &"t1".to_owned()).await.unwrap().unwrap();

    assert_eq!(session.user_id, 9);
    assert_eq!(session.cache(), None);
}
