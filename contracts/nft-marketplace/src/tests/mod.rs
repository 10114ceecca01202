
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod create_token_test;
    pub mod errors_test;
    pub mod events_test;
    pub mod guards_test;
    pub mod sale_test;
    pub mod views_test;
}
