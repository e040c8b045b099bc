// tests/config_loading.rs
use media_bias_scorer::config::{
    load_lexicon_default, load_registry_default, load_scorer_default, load_sources_from,
    ENV_LEXICON_PATH, ENV_SOURCES_PATH,
};
use media_bias_scorer::{Article, Lean};
use std::{env, fs};

#[test]
fn parse_toml_and_json_paths() {
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("sources.toml");
    fs::write(
        &p_toml,
        r#"
[[sources]]
id = "WSJ"
display_name = "Ledger"
lean = "CONSERVATIVE"
lean_strength = 0.4
"#,
    )
    .unwrap();
    let v = load_sources_from(&p_toml).unwrap();
    assert_eq!(v.len(), 1);
    assert_eq!(v[0].lean, Lean::Conservative);

    let p_json = dir.path().join("sources.json");
    fs::write(
        &p_json,
        r#"[{"id":"GDN","displayName":"Herald","lean":"PROGRESSIVE","leanStrength":0.6}]"#,
    )
    .unwrap();
    let vj = load_sources_from(&p_json).unwrap();
    assert_eq!(vj[0].id, "GDN");
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks() {
    // Isolate CWD so the repo's own config/ is not picked up.
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    env::remove_var(ENV_SOURCES_PATH);

    // 1) Nothing on disk → built-in seed
    let seed = load_registry_default().unwrap();
    assert!(seed.contains("FOX") && seed.contains("CNN") && seed.contains("REUTERS"));

    // 2) Fallback TOML in ./config/
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(
        cfg_dir.join("sources.toml"),
        r#"
[[sources]]
id = "LOCAL"
display_name = "Local"
lean = "NEUTRAL"
lean_strength = 0.2
"#,
    )
    .unwrap();
    let local = load_registry_default().unwrap();
    assert_eq!(local.len(), 1);
    assert!(local.contains("LOCAL"));

    // 3) Env wins
    let p_env = tmp.path().join("env_sources.json");
    fs::write(
        &p_env,
        r#"{"sources":[{"id":"ENV","name":"Env","baseBias":"PROGRESSIVE","biasWeight":0.3}]}"#,
    )
    .unwrap();
    env::set_var(ENV_SOURCES_PATH, p_env.display().to_string());
    let from_env = load_registry_default().unwrap();
    assert!(from_env.contains("ENV"));

    // 4) Env pointing nowhere is an error, not a silent fallback
    env::set_var(ENV_SOURCES_PATH, tmp.path().join("missing.toml").display().to_string());
    assert!(load_registry_default().is_err());
    env::remove_var(ENV_SOURCES_PATH);

    env::set_current_dir(&old).unwrap();
}

#[serial_test::serial]
#[test]
fn duplicate_ids_in_file_fail_registry() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("dupes.json");
    fs::write(
        &p,
        r#"[
            {"id":"A","displayName":"One","lean":"NEUTRAL","leanStrength":0.1},
            {"id":"A","displayName":"Two","lean":"CONSERVATIVE","leanStrength":0.9}
        ]"#,
    )
    .unwrap();
    env::set_var(ENV_SOURCES_PATH, p.display().to_string());
    let err = load_registry_default().unwrap_err();
    env::remove_var(ENV_SOURCES_PATH);
    assert!(format!("{err:#}").contains("registered more than once"));
}

#[serial_test::serial]
#[test]
fn lexicon_env_extends_builtin() {
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();
    env::remove_var(ENV_LEXICON_PATH);
    env::remove_var(ENV_SOURCES_PATH);

    let builtin = load_lexicon_default().unwrap();
    assert_eq!(builtin.weight("scandal"), None);

    let p = tmp.path().join("extra.json");
    fs::write(&p, r#"{"scandal": -0.7, "Triumph": 0.9}"#).unwrap();
    env::set_var(ENV_LEXICON_PATH, p.display().to_string());

    let scorer = load_scorer_default().unwrap();
    let r = scorer
        .score_article(&Article::new("s", "FOX", "Scandal! triumph, crisis"))
        .unwrap();
    let words: Vec<&str> = r.detected_keywords.iter().map(|k| k.word.as_str()).collect();
    assert_eq!(words, vec!["scandal", "triumph", "crisis"]);

    env::remove_var(ENV_LEXICON_PATH);
    env::set_current_dir(&old).unwrap();
}
