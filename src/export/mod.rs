pub mod excel;
pub mod geojson;

use crate::cli::ExportFormat;
use crate::error::Result;
use plot_tracker_common::PlotState;
use std::path::{Path, PathBuf};
use tracing::info;

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let excel_path = output.join(format!("{}.xlsx", title));
        let geojson_path = output.join(format!("{}.geojson", title));
        (excel_path, geojson_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let excel_path = parent.join(format!("{}.xlsx", stem));
        let geojson_path = parent.join(format!("{}.geojson", stem));
        (excel_path, geojson_path)
    }
}

/// 指定形式で出力し、書き出したファイルを返す
pub fn export_state(
    state: &PlotState,
    format: &ExportFormat,
    output: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    let written = match format {
        ExportFormat::Excel => {
            let path = output_path_for_format(output, title, "xlsx");
            info!("Excelを生成中...");
            excel::generate_excel(state, &path, title)?;
            vec![path]
        }
        ExportFormat::GeoJson => {
            let path = output_path_for_format(output, title, "geojson");
            info!("GeoJSONを生成中...");
            geojson::write_geojson(state, &path)?;
            vec![path]
        }
        ExportFormat::Both => {
            let (excel_path, geojson_path) = output_paths_for_both(output, title);

            info!("Excelを生成中...");
            excel::generate_excel(state, &excel_path, title)?;

            info!("GeoJSONを生成中...");
            geojson::write_geojson(state, &geojson_path)?;

            vec![excel_path, geojson_path]
        }
    };

    Ok(written)
}
