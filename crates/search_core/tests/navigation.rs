use search_core::{NavigationError, NavigationUrlBuilder};

#[test]
fn default_builder_targets_bing_results() {
    let url = NavigationUrlBuilder::default()
        .build_search_url("weather")
        .expect("valid url");
    assert_eq!(url.as_str(), "https://www.bing.com/search?q=weather");
}

#[test]
fn query_text_is_form_encoded() {
    let url = NavigationUrlBuilder::default()
        .build_search_url("new york & co?")
        .expect("valid url");
    assert_eq!(
        url.as_str(),
        "https://www.bing.com/search?q=new+york+%26+co%3F"
    );
}

#[test]
fn existing_query_pairs_are_kept() {
    let builder = NavigationUrlBuilder::new("https://search.example.com/find?lang=en", "term");
    let url = builder.build_search_url("rust").expect("valid url");
    assert_eq!(url.as_str(), "https://search.example.com/find?lang=en&term=rust");
}

#[test]
fn unparsable_endpoint_is_rejected() {
    let builder = NavigationUrlBuilder::new("not a url", "q");
    assert_eq!(
        builder.build_search_url("weather"),
        Err(NavigationError::InvalidQueryUrl {
            url: "not a url".to_string()
        })
    );
}

#[test]
fn non_web_endpoint_is_rejected() {
    let builder = NavigationUrlBuilder::new("mailto:someone@example.com", "q");
    assert!(matches!(
        builder.build_search_url("weather"),
        Err(NavigationError::InvalidQueryUrl { .. })
    ));
}

#[test]
fn empty_parameter_name_is_rejected() {
    let builder = NavigationUrlBuilder::new("https://www.bing.com/search", "");
    assert!(builder.build_search_url("weather").is_err());
}
