//! 設定ファイルテスト

use image_fetch_common::Locale;
use image_fetch_rust::config::{Config, RunOverrides, DEFAULT_FILE_NAME};
use image_fetch_rust::error::ImageFetchError;
use std::time::Duration;
use tempfile::tempdir;

/// 設定ファイルがなければ既定値
#[test]
fn test_load_missing_file_gives_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("config.json")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.file_name, DEFAULT_FILE_NAME);
    assert_eq!(config.quality(), 100);
    assert_eq!(config.locale, Locale::En);
    assert!(config.timeout().is_none());
}

/// 保存と読み込み
#[test]
fn test_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        output_dir: Some(dir.path().join("pictures")),
        locale: Locale::Ru,
        timeout_seconds: Some(15),
        ..Config::default()
    };
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.timeout(), Some(Duration::from_secs(15)));
}

/// 一部だけ書かれた設定は残りを既定値で補う
#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "locale": "ja" }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.locale, Locale::Ja);
    assert_eq!(config.file_name, DEFAULT_FILE_NAME);
    assert_eq!(config.jpeg_quality, 100);
}

/// 壊れた設定はJSONエラー
#[test]
fn test_invalid_file_is_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ImageFetchError::JsonParse(_)));
}

/// 保存先パスの解決
#[test]
fn test_target_path_uses_output_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = Config {
        output_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };

    assert_eq!(
        config.target_path().unwrap(),
        dir.path().join("downloaded_image.jpg")
    );
}

/// ファイル名が空なら設定エラー
#[test]
fn test_empty_file_name_is_error() {
    let config = Config {
        file_name: "  ".into(),
        ..Config::default()
    };
    assert!(matches!(config.target_path(), Err(ImageFetchError::Config(_))));
}

/// 品質は1-100に丸める
#[test]
fn test_quality_clamped() {
    let config = Config {
        jpeg_quality: 0,
        ..Config::default()
    };
    assert_eq!(config.quality(), 1);

    let config = Config {
        jpeg_quality: 255,
        ..Config::default()
    };
    assert_eq!(config.quality(), 100);
}

/// 実行時の上書きは複製にだけ効き、保存する設定には残らない
#[test]
fn test_run_overrides_are_not_saved() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");

    let mut config = Config::load_from(&path).unwrap();
    let run = config.with_overrides(&RunOverrides {
        locale: Some(Locale::Ja),
        file_name: Some("other.jpg".into()),
        jpeg_quality: Some(50),
        ..RunOverrides::default()
    });
    assert_eq!(run.locale, Locale::Ja);
    assert_eq!(run.file_name, "other.jpg");
    assert_eq!(run.quality(), 50);

    // config --set-timeout 5 相当
    config.timeout_seconds = Some(5);
    config.save_to(&path).expect("設定保存失敗");

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.locale, Locale::En);
    assert_eq!(loaded.file_name, DEFAULT_FILE_NAME);
    assert_eq!(loaded.jpeg_quality, 100);
    assert_eq!(loaded.timeout_seconds, Some(5));
    assert!(!std::fs::read_to_string(&path).unwrap().contains("\"ja\""));
}
