// Unit tests for the WeekStart convention
// Parameterized over both conventions and their string/numeric forms

use chrono::Weekday;
use test_case::test_case;

use poll_calendar::WeekStart;

#[test_case("sunday", WeekStart::Sunday; "lowercase sunday")]
#[test_case("Monday", WeekStart::Monday; "capitalized monday")]
#[test_case("MON", WeekStart::Monday; "short monday")]
#[test_case("sun", WeekStart::Sunday; "short sunday")]
fn test_parse(input: &str, expected: WeekStart) {
    assert_eq!(input.parse::<WeekStart>().unwrap(), expected);
}

#[test_case("tuesday"; "other weekday")]
#[test_case(""; "empty")]
fn test_lenient_parse_falls_back_to_sunday(input: &str) {
    assert!(input.parse::<WeekStart>().is_err());
    assert_eq!(WeekStart::from_str_or_default(input), WeekStart::Sunday);
}

#[test_case(WeekStart::Sunday, Weekday::Sun, 0; "sunday")]
#[test_case(WeekStart::Monday, Weekday::Mon, 1; "monday")]
fn test_conversions(start: WeekStart, weekday: Weekday, index: u8) {
    assert_eq!(Weekday::from(start), weekday);
    assert_eq!(start.as_index(), index);
    assert_eq!(WeekStart::from_index(index), start);
    assert_eq!(start.to_string().parse::<WeekStart>().unwrap(), start);
}

#[test]
fn test_serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&WeekStart::Monday).unwrap(), "\"monday\"");
    let parsed: WeekStart = serde_json::from_str("\"sunday\"").unwrap();
    assert_eq!(parsed, WeekStart::Sunday);
}

#[test]
fn test_day_names_cover_the_week() {
    for start in [WeekStart::Sunday, WeekStart::Monday] {
        let mut names = start.day_names().to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 7);
    }
}
