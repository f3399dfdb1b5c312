//! Deployment-readiness checklist
//!
//! A flat report derived from the configuration snapshot, served to the
//! admin UI to answer "is the site minimally configured to run". Every
//! field is a pure function of the snapshot; the checklist is recomputed
//! from scratch on every process start.

use super::{SiteConfig, StorageKind, ThemePreference};
use serde::Serialize;

/// Flat checklist of configuration facts.
///
/// Serialized field names are stable API for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigChecklist {
    // Storage
    pub has_database: bool,
    pub is_postgres_ssl_enabled: bool,
    pub has_vercel_postgres: bool,
    pub has_vercel_kv: bool,
    pub has_vercel_blob_storage: bool,
    pub has_cloudflare_r2_storage: bool,
    pub has_aws_s3_storage: bool,
    pub has_storage_provider: bool,
    pub has_multiple_storage_providers: bool,
    pub current_storage: StorageKind,
    // Auth
    pub has_auth_secret: bool,
    pub has_admin_user: bool,
    // Content
    pub has_domain: bool,
    pub has_title: bool,
    pub has_description: bool,
    pub has_about: bool,
    // AI
    pub is_ai_text_generation_enabled: bool,
    /// Presentation rule: unset selection reads `["all"]`, a declared
    /// but empty selection reads `["none"]`.
    pub ai_text_auto_generated_fields: Vec<String>,
    pub has_ai_text_auto_generated_fields: bool,
    // Performance
    pub is_statically_optimized: bool,
    pub are_photos_statically_optimized: bool,
    pub are_photo_og_images_statically_optimized: bool,
    pub are_photo_categories_statically_optimized: bool,
    pub are_photo_category_og_images_statically_optimized: bool,
    pub are_original_uploads_preserved: bool,
    pub image_quality: u8,
    pub has_image_quality: bool,
    pub is_blur_enabled: bool,
    // Visual
    pub has_default_theme: bool,
    pub default_theme: ThemePreference,
    pub are_photos_matted: bool,
    // Display
    pub show_exif_info: bool,
    pub show_zoom_controls: bool,
    pub show_taken_at_time: bool,
    pub show_social: bool,
    pub show_film_simulations: bool,
    pub show_repo_link: bool,
    // Grid
    pub is_grid_homepage_enabled: bool,
    pub grid_aspect_ratio: f32,
    pub has_grid_aspect_ratio: bool,
    pub is_high_density_grid: bool,
    pub has_grid_density_preference: bool,
    // Settings
    pub is_geo_privacy_enabled: bool,
    pub are_public_downloads_enabled: bool,
    pub is_public_api_enabled: bool,
    pub is_priority_order_enabled: bool,
    pub is_og_text_bottom_aligned: bool,
    // Misc
    pub base_url: Option<String>,
    pub commit_sha: Option<String>,
    pub commit_message: Option<String>,
    pub commit_url: Option<String>,
}

impl ConfigChecklist {
    pub(super) fn derive(config: &SiteConfig) -> Self {
        let ai_fields = if config.ai.has_declared_fields {
            if config.ai.auto_generated_fields.is_empty() {
                vec!["none".to_string()]
            } else {
                config
                    .ai
                    .auto_generated_fields
                    .iter()
                    .map(|field| field.as_str().to_string())
                    .collect()
            }
        } else {
            vec!["all".to_string()]
        };

        Self {
            has_database: config.storage.has_database,
            is_postgres_ssl_enabled: config.storage.postgres_ssl_enabled,
            has_vercel_postgres: config.storage.has_vercel_postgres,
            has_vercel_kv: config.storage.has_vercel_kv,
            has_vercel_blob_storage: config.storage.has_vercel_blob,
            has_cloudflare_r2_storage: config.storage.has_cloudflare_r2,
            has_aws_s3_storage: config.storage.has_aws_s3,
            has_storage_provider: config.storage.has_storage_provider,
            has_multiple_storage_providers: config.storage.has_multiple_storage_providers,
            current_storage: config.storage.current_storage,
            has_auth_secret: config.auth.has_auth_secret,
            has_admin_user: config.auth.has_admin_user,
            has_domain: config.identity.has_declared_domain,
            has_title: config.identity.has_declared_title,
            has_description: config.identity.has_declared_description,
            has_about: config.identity.has_declared_about,
            is_ai_text_generation_enabled: config.ai.text_generation_enabled,
            ai_text_auto_generated_fields: ai_fields,
            has_ai_text_auto_generated_fields: config.ai.has_declared_fields,
            is_statically_optimized: config.performance.statically_optimized_photos
                || config.performance.statically_optimized_photo_og_images
                || config.performance.statically_optimized_photo_categories,
            are_photos_statically_optimized: config.performance.statically_optimized_photos,
            are_photo_og_images_statically_optimized: config
                .performance
                .statically_optimized_photo_og_images,
            are_photo_categories_statically_optimized: config
                .performance
                .statically_optimized_photo_categories,
            are_photo_category_og_images_statically_optimized: config
                .performance
                .statically_optimized_photo_category_og_images,
            are_original_uploads_preserved: config.performance.preserve_original_uploads,
            image_quality: config.performance.image_quality,
            has_image_quality: config.performance.has_declared_image_quality,
            is_blur_enabled: config.performance.blur_enabled,
            has_default_theme: config.visual.has_declared_theme,
            default_theme: config.visual.default_theme,
            are_photos_matted: config.visual.matte_photos,
            show_exif_info: config.display.show_exif_data,
            show_zoom_controls: config.display.show_zoom_controls,
            show_taken_at_time: config.display.show_taken_at_time,
            show_social: config.display.show_social,
            show_film_simulations: config.display.show_film_simulations,
            show_repo_link: config.display.show_repo_link,
            is_grid_homepage_enabled: config.grid.homepage_enabled,
            grid_aspect_ratio: config.grid.aspect_ratio,
            has_grid_aspect_ratio: config.grid.has_declared_aspect_ratio,
            is_high_density_grid: config.grid.high_density,
            has_grid_density_preference: config.grid.has_density_preference,
            is_geo_privacy_enabled: config.settings.geo_privacy_enabled,
            are_public_downloads_enabled: config.settings.allow_public_downloads,
            is_public_api_enabled: config.settings.public_api_enabled,
            is_priority_order_enabled: config.settings.priority_order_enabled,
            is_og_text_bottom_aligned: config.settings.og_text_bottom_alignment,
            base_url: config.deployment.base_url.clone(),
            commit_sha: config.deployment.commit_sha_short.clone(),
            commit_message: config.deployment.commit_message.clone(),
            commit_url: config.deployment.commit_url.clone(),
        }
    }

    /// The minimum-configuration AND: database, storage, auth secret,
    /// admin credentials.
    pub fn is_site_ready(&self) -> bool {
        self.has_database && self.has_storage_provider && self.has_auth_secret && self.has_admin_user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvSnapshot;

    fn checklist(pairs: &[(&str, &str)]) -> ConfigChecklist {
        let env: EnvSnapshot = pairs.iter().copied().collect();
        SiteConfig::load(&env).checklist()
    }

    #[test]
    fn ready_checklist_matches_config() {
        let checklist = checklist(&[
            ("POSTGRES_URL", "postgres://localhost/photos"),
            ("BLOB_READ_WRITE_TOKEN", "token"),
            ("AUTH_SECRET", "secret"),
            ("ADMIN_EMAIL", "admin@example.com"),
            ("ADMIN_PASSWORD", "password"),
        ]);
        assert!(checklist.is_site_ready());
        assert!(checklist.has_database);
        assert!(checklist.has_storage_provider);
        assert_eq!(checklist.current_storage, StorageKind::VercelBlob);
    }

    #[test]
    fn ai_fields_presentation_rule() {
        assert_eq!(checklist(&[]).ai_text_auto_generated_fields, vec!["all"]);
        assert_eq!(
            checklist(&[("AI_TEXT_AUTO_GENERATED_FIELDS", "none")])
                .ai_text_auto_generated_fields,
            vec!["none"]
        );
        assert_eq!(
            checklist(&[("AI_TEXT_AUTO_GENERATED_FIELDS", "unknown-field")])
                .ai_text_auto_generated_fields,
            vec!["none"]
        );
        assert_eq!(
            checklist(&[("AI_TEXT_AUTO_GENERATED_FIELDS", "title,tags")])
                .ai_text_auto_generated_fields,
            vec!["title", "tags"]
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(checklist(&[])).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("hasDatabase"));
        assert!(object.contains_key("currentStorage"));
        assert!(object.contains_key("aiTextAutoGeneratedFields"));
        assert_eq!(object["currentStorage"], "vercel-blob");
        assert_eq!(object["defaultTheme"], "system");
        assert_eq!(object["imageQuality"], 75);
    }
}
