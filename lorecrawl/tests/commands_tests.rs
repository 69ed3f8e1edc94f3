use lorecrawl::commands::command_argument_builder;
use lorecrawl::handlers::resolve_output_path;
use url::Url;

#[test]
fn test_bare_invocation_uses_defaults() {
    let matches = command_argument_builder().get_matches_from(["lorecrawl"]);

    assert_eq!(
        matches.get_one::<Url>("base-url").unwrap().as_str(),
        "https://wiki.wanderinginn.com/"
    );
    assert_eq!(
        matches.get_one::<String>("browse-page").unwrap(),
        "The_Wandering_Inn_Wiki:Browse_the_Wiki"
    );
    assert_eq!(
        matches.get_one::<String>("output").unwrap(),
        "wiki-terms.json"
    );
    assert_eq!(*matches.get_one::<u64>("delay-ms").unwrap(), 1000);
    assert_eq!(*matches.get_one::<u64>("timeout").unwrap(), 10);
    assert!(!matches.get_flag("quiet"));
}

#[test]
fn test_overrides_parse() {
    let matches = command_argument_builder().get_matches_from([
        "lorecrawl",
        "--base-url",
        "http://localhost:8080",
        "--browse-page",
        "Special:Browse",
        "--output",
        "out/terms.json",
        "--delay-ms",
        "0",
        "--timeout",
        "30",
        "--quiet",
    ]);

    assert_eq!(
        matches.get_one::<Url>("base-url").unwrap().as_str(),
        "http://localhost:8080/"
    );
    assert_eq!(
        matches.get_one::<String>("browse-page").unwrap(),
        "Special:Browse"
    );
    assert_eq!(*matches.get_one::<u64>("delay-ms").unwrap(), 0);
    assert_eq!(*matches.get_one::<u64>("timeout").unwrap(), 30);
    assert!(matches.get_flag("quiet"));
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let result = command_argument_builder().try_get_matches_from([
        "lorecrawl",
        "--base-url",
        "not a url",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_resolve_output_path_expands_tilde() {
    let path = resolve_output_path("~/terms.json");
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.to_string_lossy().ends_with("terms.json"));
}

#[test]
fn test_resolve_output_path_leaves_plain_paths_alone() {
    let path = resolve_output_path("out/terms.json");
    assert_eq!(path, std::path::PathBuf::from("out/terms.json"));
}
