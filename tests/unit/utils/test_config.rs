use relateiq_client::utils::config::get_env_or_default;
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("RIQ_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("RIQ_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("RIQ_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("RIQ_MISSING_VAR");
        let result: String = get_env_or_default("RIQ_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_trims_value() {
    unsafe {
        env::set_var("RIQ_TEST_VAR_PADDED", "  42 ");
        let result: u64 = get_env_or_default("RIQ_TEST_VAR_PADDED", 0);
        assert_eq!(result, 42);
        env::remove_var("RIQ_TEST_VAR_PADDED");
    }
}

#[test]
fn test_get_env_or_default_with_blank_var() {
    unsafe {
        env::set_var("RIQ_TEST_VAR_BLANK", "   ");
        let result: String = get_env_or_default("RIQ_TEST_VAR_BLANK", "default".to_string());
        assert_eq!(result, "default");
        env::remove_var("RIQ_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("RIQ_TEST_VAR_INVALID", "not_a_number");
        let result: i32 = get_env_or_default("RIQ_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("RIQ_TEST_VAR_INVALID");
    }
}
