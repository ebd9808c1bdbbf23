//! Startup seed data.
//!
//! [`seed_default_themes`] always runs: an empty `theme_settings` table gets
//! the two stock palettes so `GET /theme-settings/active` works out of the
//! box. [`seed_demo_data`] is opt-in (`SEED_DEMO_DATA=true`) and populates a
//! small exhibitor content set covering every block type.

use serde_json::json;

use hub_db::models::category::CreateCategory;
use hub_db::models::content_block::CreateContentBlock;
use hub_db::models::resource::CreateResource;
use hub_db::models::theme_setting::CreateThemeSetting;
use hub_db::repositories::{CategoryRepo, ContentBlockRepo, ResourceRepo, ThemeSettingRepo};
use hub_db::DbPool;

/// Insert the stock themes if no themes exist yet. The default dark palette
/// starts active.
pub async fn seed_default_themes(pool: &DbPool) -> Result<(), sqlx::Error> {
    if !ThemeSettingRepo::list(pool).await?.is_empty() {
        return Ok(());
    }

    ThemeSettingRepo::create(
        pool,
        &CreateThemeSetting {
            name: "Tema Padrão".to_string(),
            primary_color: "#9D5CFF".to_string(),
            background_color: "#0C0D13".to_string(),
            surface_color: "#14151F".to_string(),
            border_color: "#1F2231".to_string(),
            text_color: "#FFFFFF".to_string(),
            logo_url: None,
            is_active: Some(true),
        },
    )
    .await?;

    ThemeSettingRepo::create(
        pool,
        &CreateThemeSetting {
            name: "Tema Corporativo".to_string(),
            primary_color: "#0073E6".to_string(),
            background_color: "#0F172A".to_string(),
            surface_color: "#1E293B".to_string(),
            border_color: "#334155".to_string(),
            text_color: "#F8FAFC".to_string(),
            logo_url: None,
            is_active: Some(false),
        },
    )
    .await?;

    tracing::info!("Seeded default themes");
    Ok(())
}

/// Insert demo categories, resources, and a block set covering all eight
/// block types. Skipped when any category already exists.
pub async fn seed_demo_data(pool: &DbPool) -> Result<(), sqlx::Error> {
    if !CategoryRepo::list(pool).await?.is_empty() {
        return Ok(());
    }

    let pre_event = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: "Pré-Evento".to_string(),
            icon: Some("CheckCircle".to_string()),
        },
    )
    .await?;
    let during_event = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: "Durante o Evento".to_string(),
            icon: Some("Calendar".to_string()),
        },
    )
    .await?;
    let marketing = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: "Materiais de Marketing".to_string(),
            icon: Some("Package".to_string()),
        },
    )
    .await?;

    let checklist = ResourceRepo::create(
        pool,
        &CreateResource {
            title: "Checklist de Preparação".to_string(),
            description: Some(
                "Todos os itens que você precisa verificar antes do evento para garantir \
                 que seu estande esteja perfeito."
                    .to_string(),
            ),
            category_id: pre_event.id,
            read_time: None,
        },
    )
    .await?;
    ResourceRepo::create(
        pool,
        &CreateResource {
            title: "Orientações de Montagem".to_string(),
            description: Some(
                "Instruções detalhadas para a montagem do seu estande, incluindo regras \
                 e cronograma."
                    .to_string(),
            ),
            category_id: pre_event.id,
            read_time: Some(8),
        },
    )
    .await?;
    ResourceRepo::create(
        pool,
        &CreateResource {
            title: "Horários do Evento".to_string(),
            description: Some(
                "Cronograma completo de todas as atividades do evento, incluindo abertura \
                 e fechamento."
                    .to_string(),
            ),
            category_id: during_event.id,
            read_time: Some(2),
        },
    )
    .await?;
    ResourceRepo::create(
        pool,
        &CreateResource {
            title: "Materiais Gráficos".to_string(),
            description: Some(
                "Logos, banners e templates para suas comunicações sobre o evento.".to_string(),
            ),
            category_id: marketing.id,
            read_time: Some(4),
        },
    )
    .await?;

    // One block of each type on the checklist resource, in display order.
    let blocks = [
        (
            "checklist",
            Some("Checklist: O que levar para o evento"),
            Some("Confira se você preparou todos estes itens antes de ir para o evento."),
            json!({
                "items": [
                    { "id": "1", "text": "Banners e materiais gráficos para o estande", "checked": false },
                    { "id": "2", "text": "Cartões de visita e materiais promocionais", "checked": false },
                    { "id": "3", "text": "Computadores e dispositivos eletrônicos", "checked": false },
                    { "id": "4", "text": "Extensões e adaptadores de energia", "checked": false }
                ]
            }),
        ),
        (
            "alert",
            Some("Informação Importante"),
            None,
            json!({
                "content": "Não esqueça que a montagem do seu estande deve ser concluída \
                            até 18:00h do dia anterior ao início do evento.",
                "type": "warning"
            }),
        ),
        (
            "text",
            Some("Informações sobre Estacionamento"),
            None,
            json!({
                "content": "O evento disponibiliza estacionamento gratuito para expositores \
                            mediante apresentação de credencial. O acesso é pela entrada \
                            lateral do pavilhão (Portão B)."
            }),
        ),
        (
            "copyableText",
            Some("Código de Acesso Wi-Fi"),
            None,
            json!({ "content": "EXPOSITOR2023_VIP" }),
        ),
        (
            "fileDownload",
            Some("Manual do Expositor"),
            Some("Download do manual completo com todas as normas e regulamentos."),
            json!({
                "filename": "manual_expositor_2023.pdf",
                "filesize": "2.4 MB",
                "url": "#"
            }),
        ),
        (
            "link",
            Some("Links Úteis"),
            None,
            json!({
                "links": [
                    { "url": "#", "text": "Mapa do Local do Evento" },
                    { "url": "#", "text": "Lista de Hotéis Parceiros" }
                ]
            }),
        ),
        (
            "video",
            Some("Tutorial: Montagem do Estande"),
            Some("Assista ao vídeo para instruções detalhadas sobre a montagem."),
            json!({
                "title": "Tutorial de Montagem de Estande",
                "duration": "8:24",
                "thumbnailUrl": "#",
                "embedUrl": "#"
            }),
        ),
        (
            "custom",
            Some("Programação do Evento"),
            None,
            json!({
                "content": "<table><tr><td>Dia 1</td><td>08:00 - 09:30</td>\
                            <td>Credenciamento</td></tr></table>",
                "html": true
            }),
        ),
    ];

    for (position, (block_type, title, description, content)) in blocks.into_iter().enumerate() {
        ContentBlockRepo::create(
            pool,
            &CreateContentBlock {
                resource_id: checklist.id,
                block_type: block_type.to_string(),
                title: title.map(str::to_string),
                description: description.map(str::to_string),
                content,
                sort_order: position as i32,
            },
        )
        .await?;
    }

    tracing::info!("Seeded demo content");
    Ok(())
}
