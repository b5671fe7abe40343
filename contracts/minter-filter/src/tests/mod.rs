
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod bulk_removal_test;
    pub mod mint_test;
    pub mod projects_test;
    pub mod registry_test;
    pub mod usage_test;
    pub mod views_test;
}
