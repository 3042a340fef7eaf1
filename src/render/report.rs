//! Serializable view of one evaluation, shared by `preview` and its
//! `--json` output.

use chrono::NaiveDate;
use serde::Serialize;

use crate::activation::{find_featured, is_active};
use crate::models::calendar::Calendar;
use crate::reference::ReferenceDate;
use crate::render::{banner_for, page_title, stage_date_label, Banner};

#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    pub title: String,
    pub reference_date: NaiveDate,
    pub simulated: bool,
    pub featured: Option<FeaturedEntry>,
    pub stages: Vec<StageEntry>,
}

#[derive(Debug, Serialize)]
pub struct FeaturedEntry {
    pub stage: String,
    pub order: u32,
    pub banner: BannerEntry,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BannerEntry {
    Button {
        label: String,
        href: String,
        external: bool,
    },
    Text {
        text: String,
    },
}

/// One row of the rendered stage list. `number` is the display position;
/// `order` the raw flow order. The link is the raw document link, enabled
/// in the UI only while the stage is active.
#[derive(Debug, Serialize)]
pub struct StageEntry {
    pub number: usize,
    pub order: u32,
    pub name: String,
    pub date: String,
    pub active: bool,
    pub link: Option<String>,
}

impl EvaluationReport {
    pub fn build(
        calendar: &Calendar,
        reference: ReferenceDate,
        title_override: Option<&str>,
    ) -> Self {
        let featured = find_featured(calendar, reference.date).map(|stage| {
            // find_featured only returns stages that opt in, so the
            // featured section is present here.
            let banner = stage
                .featured
                .as_ref()
                .map(banner_for)
                .unwrap_or(Banner::Text(String::new()));
            FeaturedEntry {
                stage: stage.name.clone(),
                order: stage.order,
                banner: match banner {
                    Banner::Button {
                        label,
                        href,
                        external,
                    } => BannerEntry::Button {
                        label,
                        href,
                        external,
                    },
                    Banner::Text(text) => BannerEntry::Text { text },
                },
            }
        });

        let stages = calendar
            .listed_stages()
            .into_iter()
            .enumerate()
            .map(|(index, stage)| StageEntry {
                number: index + 1,
                order: stage.order,
                name: stage.name.clone(),
                date: stage_date_label(stage),
                active: is_active(stage, reference.date),
                link: stage.document_link.clone(),
            })
            .collect();

        EvaluationReport {
            title: page_title(calendar, title_override),
            reference_date: reference.date,
            simulated: reference.simulated,
            featured,
            stages,
        }
    }
}
