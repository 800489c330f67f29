use serde_json::Value;
use uniform_scanner::{JsonReporter, TextReporter, UniformScanner};

fn lines(src: &[&str]) -> Vec<String> {
    src.iter().map(|l| l.to_string()).collect()
}

#[cfg(test)]
mod text_reporter_tests {
    use super::*;

    #[test]
    fn test_plain_uniform_prints_bare_identifier() {
        let mut scanner = UniformScanner::new(lines(&["uniform vec3 lightPos;"]));
        let mut out = Vec::new();

        scanner
            .scan(&mut TextReporter::new(&mut out))
            .expect("Scan should succeed");

        assert_eq!(String::from_utf8(out).unwrap(), "lightPos\n");
    }

    #[test]
    fn test_struct_prints_header_and_end_lines() {
        let mut scanner = UniformScanner::new(lines(&[
            "uniform struct Light {",
            "  vec3 pos;",
            "} mainLight;",
            "uniform vec3 eye;",
        ]));
        let mut out = Vec::new();

        scanner
            .scan(&mut TextReporter::new(&mut out))
            .expect("Scan should succeed");

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "STRUCT: Light\nSTRUCT END: mainLight\neye\n"
        );
    }

    #[test]
    fn test_no_matches_prints_nothing() {
        let mut scanner = UniformScanner::new(lines(&["// comment", "not a uniform line"]));
        let mut out = Vec::new();

        scanner
            .scan(&mut TextReporter::new(&mut out))
            .expect("Scan should succeed");

        assert!(out.is_empty(), "No events should mean no output");
    }
}

#[cfg(test)]
mod json_reporter_tests {
    use super::*;

    #[test]
    fn test_one_parseable_object_per_event() {
        let mut scanner = UniformScanner::new(lines(&[
            "uniform struct Light {",
            "  vec3 pos;",
            "} mainLight;",
            "uniform vec3 eye;",
        ]));
        let mut out = Vec::new();

        scanner
            .scan(&mut JsonReporter::new(&mut out))
            .expect("Scan should succeed");

        let text = String::from_utf8(out).unwrap();
        let objects: Vec<Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).expect("Each line should be valid JSON"))
            .collect();
        assert_eq!(objects.len(), 3, "Should emit one object per event");

        assert_eq!(objects[0]["event"], "struct_start");
        assert_eq!(objects[0]["type_name"], "Light");

        assert_eq!(objects[1]["event"], "struct_end");
        assert_eq!(objects[1]["type_name"], "Light");
        assert_eq!(objects[1]["instance_name"], "mainLight");
        assert_eq!(objects[1]["members"], serde_json::json!(["  vec3 pos;"]));

        assert_eq!(objects[2]["event"], "uniform");
        assert_eq!(objects[2]["name"], "eye");
    }
}
