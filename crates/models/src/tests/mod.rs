
/// CRUD round trips against PostgreSQL (skipped without `DATABASE_URL`)
pub mod crud_tests;
