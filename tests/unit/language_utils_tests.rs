/*!
 * Tests for language code utilities
 */

use pipetrack::language_utils::{
    get_language_name, get_native_language_name, is_rtl_language, normalize_language_code,
    validate_language_code,
};

/// Test validation of ISO 639-1 codes
#[test]
fn test_validateLanguageCode_withValidCodes_shouldSucceed() {
    assert!(validate_language_code("en").is_ok());
    assert!(validate_language_code("fr").is_ok());
    assert!(validate_language_code("ar").is_ok());
    assert!(validate_language_code(" He ").is_ok());
}

/// Test validation rejects unknown or malformed codes
#[test]
fn test_validateLanguageCode_withInvalidCodes_shouldFail() {
    assert!(validate_language_code("xx").is_err());
    assert!(validate_language_code("english").is_err());
    assert!(validate_language_code("").is_err());
}

/// Test normalization trims and lowercases
#[test]
fn test_normalizeLanguageCode_shouldTrimAndLowercase() {
    assert_eq!(normalize_language_code(" EN "), "en");
    assert_eq!(normalize_language_code("Ar"), "ar");
}

/// Test the right-to-left classification
#[test]
fn test_isRtlLanguage_shouldMatchFixedSet() {
    assert!(is_rtl_language("ar"));
    assert!(is_rtl_language("he"));
    assert!(is_rtl_language("fa"));
    assert!(is_rtl_language("ur"));
    assert!(is_rtl_language(" AR "));

    assert!(!is_rtl_language("en"));
    assert!(!is_rtl_language("fr"));
}

/// Test language display names
#[test]
fn test_getLanguageName_withKnownCode_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("fr").unwrap(), "French");
    assert!(get_language_name("xx").is_err());
}

/// Test native language names fall back to the English name when unknown
#[test]
fn test_getNativeLanguageName_withKnownCode_shouldReturnName() {
    let name = get_native_language_name("fr").unwrap();
    assert!(!name.is_empty());
    assert!(get_native_language_name("xx").is_err());
}
