//! Shared DTO builders for the repository integration tests.
#![allow(dead_code)] // each test binary uses a subset

use hub_db::models::category::CreateCategory;
use hub_db::models::content_block::CreateContentBlock;
use hub_db::models::resource::CreateResource;
use hub_db::models::theme_setting::CreateThemeSetting;

pub fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        icon: None,
    }
}

pub fn new_resource(category_id: i64, title: &str) -> CreateResource {
    CreateResource {
        title: title.to_string(),
        description: None,
        category_id,
        read_time: None,
    }
}

pub fn new_block(resource_id: i64, block_type: &str, sort_order: i32) -> CreateContentBlock {
    let content = match block_type {
        "checklist" => serde_json::json!({ "items": [] }),
        "link" => serde_json::json!({ "links": [] }),
        "fileDownload" => serde_json::json!({ "filename": "file.pdf" }),
        "video" => serde_json::json!({}),
        // text, copyableText, alert, custom and anything else under test.
        _ => serde_json::json!({ "content": "sample" }),
    };
    CreateContentBlock {
        resource_id,
        block_type: block_type.to_string(),
        title: None,
        description: None,
        content,
        sort_order,
    }
}

pub fn new_theme(name: &str, is_active: bool) -> CreateThemeSetting {
    CreateThemeSetting {
        name: name.to_string(),
        primary_color: "#9D5CFF".to_string(),
        background_color: "#0C0D13".to_string(),
        surface_color: "#14151F".to_string(),
        border_color: "#1F2231".to_string(),
        text_color: "#FFFFFF".to_string(),
        logo_url: None,
        is_active: Some(is_active),
    }
}
