//! Integration tests for the Ordo site service
//!
//! These tests exercise the public library API end to end (registry,
//! resolver, translator, diagram) and the HTTP API on a live server.

use ordo_site::diagram::FlowDiagram;
use ordo_site::i18n::{CoverageReport, I18nError, LocaleRegistry, Translation};
use ordo_site::server::{self, AppState};
use proptest::prelude::*;
use tempfile::TempDir;
use tokio::net::TcpListener;

// ==================== Test Helpers ====================

/// `{en: {greeting: {hello: "Hello"}}, zh: {greeting: {}}}` with default `en`
fn two_locale_registry() -> LocaleRegistry {
    LocaleRegistry::builder("en")
        .locale_json("en", "English", r#"{"greeting": {"hello": "Hello"}}"#)
        .expect("valid en dictionary")
        .locale_json("zh", "中文", r#"{"greeting": {}}"#)
        .expect("valid zh dictionary")
        .build()
        .expect("valid registry")
}

/// Write a locales directory with one JSON file per built-in locale
fn write_locales_dir(temp_dir: &TempDir) {
    let files = [
        ("en", r#"{"nav": {"home": "Home", "docs": "Docs"}, "title": "Ordo"}"#),
        ("zh-CN", r#"{"nav": {"home": "首页", "docs": "文档"}, "title": "Ordo 引擎"}"#),
        ("zh-TW", r#"{"nav": {"home": "首頁"}}"#),
    ];
    for (code, json) in files {
        std::fs::write(temp_dir.path().join(format!("{}.json", code)), json)
            .expect("Failed to write locale file");
    }
}

/// Start the API on an ephemeral port and return its base URL
async fn spawn_server(registry: LocaleRegistry) -> String {
    let registry: &'static LocaleRegistry = Box::leak(Box::new(registry));
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(server::serve(listener, AppState::new(registry)));
    format!("http://{}", addr)
}

// ==================== Lookup Scenario Tests ====================

#[test]
fn test_scenario_resolve_known_locale() {
    let registry = two_locale_registry();
    assert_eq!(registry.resolve("/zh/page").code(), "zh");
}

#[test]
fn test_scenario_resolve_unknown_locale() {
    let registry = two_locale_registry();
    assert_eq!(registry.resolve("/fr/page").code(), "en");
}

#[test]
fn test_scenario_default_locale_lookup() {
    let registry = two_locale_registry();
    let t = registry.translator("en").unwrap();
    assert_eq!(t.t("greeting.hello"), Translation::Text("Hello"));
}

#[test]
fn test_scenario_fallback_to_default() {
    let registry = two_locale_registry();
    let t = registry.translator("zh").unwrap();
    assert_eq!(t.t("greeting.hello"), Translation::Text("Hello"));
}

#[test]
fn test_scenario_missing_final_segment_returns_key() {
    let registry = two_locale_registry();
    let t = registry.translator("zh").unwrap();
    assert_eq!(t.t("greeting.missing"), Translation::Key("greeting.missing"));
}

#[test]
fn test_scenario_missing_root_segment_returns_key() {
    let registry = two_locale_registry();
    let t = registry.translator("zh").unwrap();
    assert_eq!(t.t("nope.deep.key"), Translation::Key("nope.deep.key"));
}

#[test]
fn test_url_to_text_pipeline() {
    let registry = LocaleRegistry::embedded().unwrap();
    let t = registry.translator_for(registry.resolve("/zh-TW/docs/intro"));
    assert_eq!(t.text("nav.docs"), "文件");
    // Not translated in zh-TW; served by the default locale
    assert_eq!(t.text("footer.license"), "基于 MIT 许可证发布。");
    assert_eq!(t.text("footer.unknown"), "footer.unknown");
}

// ==================== Registry Loading Tests ====================

#[test]
fn test_registry_from_locales_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_locales_dir(&temp_dir);

    let registry = LocaleRegistry::from_dir(temp_dir.path()).expect("Failed to load locales");
    let t = registry.translator("zh-TW").unwrap();
    assert_eq!(t.t("nav.home"), Translation::Text("首頁"));
    assert_eq!(t.t("nav.docs"), Translation::Text("文档"));

    let report = CoverageReport::for_registry(&registry);
    assert_eq!(report.get("zh-TW").unwrap().missing, vec!["nav.docs", "title"]);
}

#[test]
fn test_registry_from_dir_rejects_invalid_leaf() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_locales_dir(&temp_dir);
    std::fs::write(temp_dir.path().join("zh-TW.json"), r#"{"count": 1}"#).unwrap();

    let result = LocaleRegistry::from_dir(temp_dir.path());
    assert!(matches!(result, Err(I18nError::Parse { locale, .. }) if locale == "zh-TW"));
}

#[test]
fn test_global_install_happens_once() {
    let installed = LocaleRegistry::install(two_locale_registry()).expect("first install");
    assert_eq!(installed.default_locale().code(), "en");
    assert!(std::ptr::eq(installed, LocaleRegistry::global()));

    let second = LocaleRegistry::install(two_locale_registry());
    assert!(matches!(second, Err(I18nError::AlreadyInitialized)));
}

#[test]
fn test_lookups_across_threads() {
    let registry: &'static LocaleRegistry = Box::leak(Box::new(LocaleRegistry::embedded().unwrap()));
    let handles: Vec<_> = ["en", "zh-CN", "zh-TW"]
        .into_iter()
        .map(|code| {
            std::thread::spawn(move || {
                let t = registry.translator(code).unwrap();
                t.text("nav.home").to_string()
            })
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["Home", "首页", "首頁"]);
}

// ==================== Diagram Tests ====================

#[test]
fn test_diagram_localized_for_resolved_locale() {
    let registry = LocaleRegistry::embedded().unwrap();
    let t = registry.translator_for(registry.resolve("/en/"));
    let graph = FlowDiagram::localized(&t).graph();
    assert_eq!(graph.node("input").unwrap().data.label(), "Input JSON");
    assert_eq!(graph.node("output").unwrap().data.label(), "Decision Result");
}

// ==================== Property Tests ====================

proptest! {
    #[test]
    fn prop_resolve_always_returns_registered_locale(path in ".*") {
        let registry = two_locale_registry();
        let locale = registry.resolve(&path);
        prop_assert!(registry.contains(locale.code()));
    }

    #[test]
    fn prop_resolve_prefixed_known_locale(rest in "[a-z/]{0,20}") {
        let registry = two_locale_registry();
        let path = format!("/zh/{}", rest);
        prop_assert_eq!(registry.resolve(&path).code(), "zh");
    }

    #[test]
    fn prop_lookup_is_idempotent(key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}") {
        let registry = LocaleRegistry::embedded().unwrap();
        for locale in registry.list() {
            let t = registry.translator_for(locale);
            prop_assert_eq!(t.t(&key), t.t(&key));
        }
    }

    #[test]
    fn prop_unknown_keys_return_raw_key(key in "zz[a-z]{1,8}(\\.[a-z]{1,8}){0,3}") {
        let registry = two_locale_registry();
        let t = registry.translator("zh").unwrap();
        prop_assert_eq!(t.t(&key), Translation::Key(&key));
    }
}

// ==================== HTTP API Tests ====================

#[tokio::test]
async fn test_api_health() {
    let base = spawn_server(two_locale_registry()).await;
    let body: serde_json::Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_api_locales_and_resolve() {
    let base = spawn_server(two_locale_registry()).await;

    let locales: serde_json::Value = reqwest::get(format!("{}/api/locales", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        locales,
        serde_json::json!([
            {"code": "en", "name": "English", "default": true},
            {"code": "zh", "name": "中文", "default": false}
        ])
    );

    let resolved: serde_json::Value = reqwest::get(format!("{}/api/locale?path=/zh/docs", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(resolved["locale"], "zh");

    let fallback: serde_json::Value = reqwest::get(format!("{}/api/locale", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fallback["locale"], "en");
}

#[tokio::test]
async fn test_api_translate() {
    let base = spawn_server(two_locale_registry()).await;

    let body: serde_json::Value = reqwest::get(format!("{}/api/translate/zh/greeting.hello", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["value"], "Hello");
    assert_eq!(body["resolved"], true);

    let section: serde_json::Value = reqwest::get(format!("{}/api/translate/en/greeting", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(section["value"], serde_json::json!({"hello": "Hello"}));

    let response = reqwest::get(format!("{}/api/translate/fr/greeting.hello", base))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let error: serde_json::Value = response.json().await.unwrap();
    assert!(error["error"].as_str().unwrap().contains("fr"));
}

#[tokio::test]
async fn test_api_diagram_and_coverage() {
    let base = spawn_server(LocaleRegistry::embedded().unwrap()).await;

    let graph: serde_json::Value = reqwest::get(format!("{}/api/diagram/zh-CN", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(graph["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(graph["nodes"][0]["data"]["label"], "输入 JSON");

    let missing = reqwest::get(format!("{}/api/diagram/fr", base)).await.unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

    let report: serde_json::Value = reqwest::get(format!("{}/api/coverage", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(report["default_locale"], "zh-CN");
    assert_eq!(report["locales"].as_array().unwrap().len(), 3);
}
