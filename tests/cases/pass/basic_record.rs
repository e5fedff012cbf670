use field_rules::{Record, validate};

#[derive(Record)]
pub struct User {
    #[validate(rules = "required|len:>=,3")]
    pub name: String,

    #[validate(rules = "email")]
    pub email: String,

    pub age: u32,

    password_hash: String
}

fn main() {
    let user = User {
        name:          "Alice".into(),
        email:         "alice@example.com".into(),
        age:           30,
        password_hash: String::new()
    };
    let _ = &user.password_hash;
    assert!(validate(&user).is_ok());
}
