use courseloop::config::jwt::JwtConfig;
use courseloop::modules::users::model::UserRole;
use courseloop::utils::jwt::create_access_token;
use courseloop::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

// Low bcrypt cost keeps test user creation fast.
const TEST_BCRYPT_COST: u32 = 4;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

pub async fn create_test_user(pool: &PgPool, role: UserRole) -> TestUser {
    let email = generate_unique_email();
    let password = "testpass123";
    let hashed = hash_password(password, TEST_BCRYPT_COST).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (first_name, last_name, email, password, role)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind("Test")
    .bind("User")
    .bind(&email)
    .bind(&hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email,
        password: password.to_string(),
        role,
    }
}

#[allow(dead_code)]
pub async fn create_test_course(pool: &PgPool, instructor_id: Uuid, published: bool) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO courses (title, description, instructor_id, published)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind("Test Course")
    .bind("A course for testing")
    .bind(instructor_id)
    .bind(published)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Issues a token the same way login would, without going through HTTP.
#[allow(dead_code)]
pub fn token_for(user: &TestUser) -> String {
    create_access_token(user.id, &user.email, user.role, &JwtConfig::from_env()).unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
