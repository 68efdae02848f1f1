use derive_new::new;

#[derive(new)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
