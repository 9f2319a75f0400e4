//! Identity edits applied to freshly generated native projects
//!
//! iOS: bundle identifier in `project.pbxproj`, display name in `Info.plist`.
//! Android: `applicationId` in `app/build.gradle` and the identity string
//! resources in `strings.xml`.

use super::PlatformTarget;
use crate::config::ProjectConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Apply the identity edits for `target` using the config's app id and name
pub async fn edit_project_settings(target: PlatformTarget, config: &ProjectConfig) -> Result<()> {
    let root = config.platform_dir(target);
    match target {
        PlatformTarget::Ios => edit_ios(&root, config.app_id(), config.app_name()).await,
        PlatformTarget::Android => edit_android(&root, config.app_id(), config.app_name()).await,
    }
}

pub fn ios_project_file(ios_root: &Path) -> PathBuf {
    ios_root.join("App").join("App.xcodeproj").join("project.pbxproj")
}

pub fn ios_info_plist(ios_root: &Path) -> PathBuf {
    ios_root.join("App").join("App").join("Info.plist")
}

pub fn android_build_gradle(android_root: &Path) -> PathBuf {
    android_root.join("app").join("build.gradle")
}

pub fn android_strings(android_root: &Path) -> PathBuf {
    android_root
        .join("app")
        .join("src")
        .join("main")
        .join("res")
        .join("values")
        .join("strings.xml")
}

async fn edit_ios(root: &Path, app_id: &str, app_name: &str) -> Result<()> {
    rewrite(&ios_project_file(root), |content| {
        set_bundle_identifier(content, app_id)
    })
    .await?;
    rewrite(&ios_info_plist(root), |content| {
        set_plist_string(content, "CFBundleDisplayName", app_name)
    })
    .await
}

async fn edit_android(root: &Path, app_id: &str, app_name: &str) -> Result<()> {
    rewrite(&android_build_gradle(root), |content| {
        set_application_id(content, app_id)
    })
    .await?;
    rewrite(&android_strings(root), |content| {
        let mut updated = content.to_string();
        for (name, value) in [
            ("app_name", app_name),
            ("title_activity_main", app_name),
            ("package_name", app_id),
            ("custom_url_scheme", app_id),
        ] {
            updated = set_string_resource(&updated, name, value);
        }
        updated
    })
    .await
}

async fn rewrite(path: &Path, edit: impl FnOnce(&str) -> String) -> Result<()> {
    let content = fs::read_to_string(path).await.with_context(|| {
        format!(
            "Failed to read {} (was the platform added?)",
            path.display()
        )
    })?;
    let updated = edit(&content);
    if updated != content {
        fs::write(path, updated)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(())
}

/// Replace each `PRODUCT_BUNDLE_IDENTIFIER = ...;` assignment
pub fn set_bundle_identifier(content: &str, app_id: &str) -> String {
    replace_lines(content, |line| {
        let trimmed = line.trim_start();
        trimmed.starts_with("PRODUCT_BUNDLE_IDENTIFIER =").then(|| {
            let indent = &line[..line.len() - trimmed.len()];
            format!("{}PRODUCT_BUNDLE_IDENTIFIER = {};", indent, app_id)
        })
    })
}

/// Replace each `applicationId "..."` declaration
pub fn set_application_id(content: &str, app_id: &str) -> String {
    replace_lines(content, |line| {
        let trimmed = line.trim_start();
        trimmed.starts_with("applicationId ").then(|| {
            let indent = &line[..line.len() - trimmed.len()];
            format!("{}applicationId \"{}\"", indent, app_id)
        })
    })
}

/// Set the `<string>` value following `<key>{key}</key>`, adding the pair if absent
pub fn set_plist_string(content: &str, key: &str, value: &str) -> String {
    let key_tag = format!("<key>{}</key>", key);
    let escaped = xml_escape(value);

    if let Some(key_pos) = content.find(&key_tag) {
        let after_key = key_pos + key_tag.len();
        if let Some(open) = content[after_key..].find("<string>") {
            let start = after_key + open + "<string>".len();
            if let Some(close) = content[start..].find("</string>") {
                let end = start + close;
                return format!("{}{}{}", &content[..start], escaped, &content[end..]);
            }
        }
    }

    match content.rfind("</dict>") {
        Some(pos) => format!(
            "{}\t<key>{}</key>\n\t<string>{}</string>\n{}",
            &content[..pos],
            key,
            escaped,
            &content[pos..]
        ),
        None => content.to_string(),
    }
}

/// Set the text of `<string name="{name}">`; leaves the file alone when the resource is missing
pub fn set_string_resource(content: &str, name: &str, value: &str) -> String {
    let open_tag = format!("<string name=\"{}\">", name);
    let Some(open) = content.find(&open_tag) else {
        return content.to_string();
    };
    let start = open + open_tag.len();
    let Some(close) = content[start..].find("</string>") else {
        return content.to_string();
    };
    let end = start + close;
    format!(
        "{}{}{}",
        &content[..start],
        android_string_escape(value),
        &content[end..]
    )
}

fn replace_lines(content: &str, mut edit: impl FnMut(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        let (body, ending) = match line.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (line, ""),
        };
        match edit(body) {
            Some(replacement) => {
                out.push_str(&replacement);
                out.push_str(ending);
            }
            None => out.push_str(line),
        }
    }
    out
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Android resource strings also treat backslashes and quotes as syntax
fn android_string_escape(value: &str) -> String {
    xml_escape(&value.replace('\\', "\\\\"))
        .replace('\'', "\\'")
        .replace('"', "\\\"")
}
