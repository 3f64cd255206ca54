use dioxus::prelude::*;
use rfd::FileDialog;
use tracing::{error, info};

use crate::domain::text::strip::StripSet;
use crate::platform::desktop::blocking::run_blocking;
use crate::platform::desktop::config::AppConfig;
use crate::ui::state::app_state::AppState;
use crate::ui::state::notice::{
    decode_failed_notice, encode_failed_notice, exported_notice, loaded_notice, Notice,
};
use crate::ui::style::{
    cell_style, notice_style, root_container_style, row_header_cell_style,
    table_container_style, table_header_cell_style, table_style, toolbar_style,
};
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::import_service::ImportService;
use crate::usecase::services::preview_service::{column_letter, render};

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let mut state = AppState::new();
    let AppState {
        mut document,
        mut strip_input,
        mut notice,
        mut theme,
    } = state;

    let accepted_extensions = config.accepted_extensions.clone();
    let export_name = config.default_export_name.clone();

    let preview = document.read().as_ref().map(|doc| {
        render(
            &doc.normalized.grid,
            &doc.normalized.changed,
            &doc.normalized.original,
        )
    });
    let has_document = preview.is_some();
    let current_theme = theme();
    let current_notice = notice();

    rsx! {
        div { style: "{root_container_style(current_theme)}",
            nav { style: "{toolbar_style()}",
                button {
                    onclick: move |_| {
                        let Some(file_path) = FileDialog::new()
                            .add_filter("Spreadsheet", accepted_extensions.as_slice())
                            .pick_file() else {
                            notice.set(Notice::info("Import cancelled"));
                            return;
                        };

                        notice.set(Notice::info(format!("Reading {}", file_path.display())));

                        let strip = StripSet::parse(&strip_input());
                        let result = run_blocking("load", || {
                            ImportService::new().load(&file_path, &strip)
                        });

                        match result {
                            Ok(loaded) => {
                                notice.set(loaded_notice(&loaded));
                                document.set(Some(loaded));
                            }
                            Err(err) => {
                                error!(path = %file_path.display(), error = %err, "failed to load spreadsheet");
                                notice.set(decode_failed_notice(&file_path, &err));
                            }
                        }
                    },
                    "Open spreadsheet"
                }
                label {
                    "Remove characters: "
                    input {
                        r#type: "text",
                        placeholder: "e.g. #$%*",
                        value: strip_input(),
                        oninput: move |event| {
                            let value = event.value();
                            let strip = StripSet::parse(&value);
                            strip_input.set(value);

                            let next = document.read().as_ref().map(|doc| doc.renormalize(&strip));
                            if let Some(next) = next {
                                info!(
                                    strip = %strip,
                                    modified = next.normalized.modified_count(),
                                    "re-ran normalization"
                                );
                                notice.set(loaded_notice(&next));
                                document.set(Some(next));
                            }
                        }
                    }
                }
                button {
                    disabled: !has_document,
                    onclick: move |_| {
                        let Some(loaded) = document() else {
                            return;
                        };

                        let Some(target) = FileDialog::new()
                            .set_file_name(&export_name)
                            .add_filter("Excel workbook", &["xlsx"])
                            .save_file() else {
                            notice.set(Notice::info("Export cancelled"));
                            return;
                        };

                        let result = run_blocking("export", || {
                            ExportService::new().export(
                                &loaded.sheet.sheet_name,
                                &loaded.normalized.grid,
                                &target,
                            )
                        });
                        match result {
                            Ok(()) => notice.set(exported_notice(&target)),
                            Err(err) => {
                                error!(path = %target.display(), error = %err, "failed to export spreadsheet");
                                notice.set(encode_failed_notice(&err));
                            }
                        }
                    },
                    "Download"
                }
                button {
                    onclick: move |_| {
                        info!("reset session");
                        state.reset();
                    },
                    "Reset"
                }
                button {
                    onclick: move |_| theme.set(current_theme.toggled()),
                    "{current_theme.toggle_label()}"
                }
            }

            div { style: "{notice_style(current_notice.level)}", "{current_notice.message}" }

            if let Some(preview) = preview {
                p { "{preview.modified_count} modified cells" }
                div { style: "{table_container_style()}",
                    table { style: "{table_style(current_theme)}",
                        thead {
                            tr {
                                th { style: "{table_header_cell_style(current_theme)}" }
                                for col_idx in 0..preview.column_count {
                                    th {
                                        key: "{col_idx}",
                                        style: "{table_header_cell_style(current_theme)}",
                                        "{column_letter(col_idx)}"
                                    }
                                }
                            }
                        }
                        tbody {
                            for (row_idx, row) in preview.rows.iter().enumerate() {
                                tr { key: "{row_idx}",
                                    td { style: "{row_header_cell_style(current_theme)}", "{row_idx + 1}" }
                                    for (col_idx, cell) in row.iter().enumerate() {
                                        td {
                                            key: "{col_idx}",
                                            class: if cell.modified { "modified" } else { "" },
                                            title: cell.annotation.clone().unwrap_or_default(),
                                            style: "{cell_style(current_theme, cell.modified)}",
                                            "{cell.text}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                p { "No spreadsheet loaded" }
            }
        }
    }
}
