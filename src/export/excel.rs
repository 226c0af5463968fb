//! Excel生成
//!
//! 畝シートと区画シートの2枚構成

use crate::error::{PlotError, Result};
use plot_tracker_common::{representative_point, Bounds, LatLng, PlotState};
use rust_xlsxwriter::*;
use std::path::Path;

const ROW_HEADERS: [(&str, f64); 9] = [
    ("ID", 38.0),
    ("区画", 14.0),
    ("品種", 16.0),
    ("播種日", 12.0),
    ("定植日", 12.0),
    ("メモ", 30.0),
    ("写真", 30.0),
    ("頂点数", 8.0),
    ("代表点", 26.0),
];

const PARCEL_HEADERS: [(&str, f64); 5] = [
    ("ID", 38.0),
    ("名前", 14.0),
    ("頂点数", 8.0),
    ("畝数", 8.0),
    ("範囲", 52.0),
];

fn format_point(point: &LatLng) -> String {
    format!("{:.6}, {:.6}", point.lat, point.lng)
}

fn format_bounds(bounds: &Bounds) -> String {
    format!(
        "S{:.6} W{:.6} N{:.6} E{:.6}",
        bounds.south, bounds.west, bounds.north, bounds.east
    )
}

fn write_headers(
    worksheet: &mut Worksheet,
    headers: &[(&str, f64)],
    format: &Format,
) -> std::result::Result<(), XlsxError> {
    for (col, (label, width)) in headers.iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, *width)?;
        worksheet.write_string_with_format(0, col, *label, format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

/// Excelをバッファに生成
pub fn generate_excel_buffer(state: &PlotState, title: &str) -> std::result::Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    workbook.set_properties(&DocProperties::new().set_title(title));

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let text_format = Format::new()
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();

    // 畝
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("畝")?;
    write_headers(worksheet, &ROW_HEADERS, &header_format)?;

    for (i, row) in state.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        let meta = &row.meta;
        let parcel_name = meta
            .parcel_id
            .as_deref()
            .and_then(|pid| state.parcel(pid))
            .map(|p| p.meta.name.as_str())
            .unwrap_or("");
        let point = representative_point(&row.coords)
            .map(|p| format_point(&p))
            .unwrap_or_default();

        worksheet.write_string_with_format(r, 0, &row.id, &text_format)?;
        worksheet.write_string_with_format(r, 1, parcel_name, &text_format)?;
        worksheet.write_string_with_format(r, 2, &meta.species, &text_format)?;
        worksheet.write_string_with_format(r, 3, &meta.sowing_date, &text_format)?;
        worksheet.write_string_with_format(r, 4, &meta.planting_date, &text_format)?;
        worksheet.write_string_with_format(r, 5, &meta.notes, &text_format)?;
        worksheet.write_string_with_format(r, 6, &meta.photo, &text_format)?;
        worksheet.write_number(r, 7, row.coords.len() as f64)?;
        worksheet.write_string_with_format(r, 8, &point, &text_format)?;
    }

    // 区画
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("区画")?;
    write_headers(worksheet, &PARCEL_HEADERS, &header_format)?;

    for (i, parcel) in state.parcels.iter().enumerate() {
        let r = (i + 1) as u32;
        let row_count = state.rows_in_parcel(&parcel.id).count();
        let bounds = Bounds::from_coords(&parcel.coords)
            .map(|b| format_bounds(&b))
            .unwrap_or_default();

        worksheet.write_string_with_format(r, 0, &parcel.id, &text_format)?;
        worksheet.write_string_with_format(r, 1, &parcel.meta.name, &text_format)?;
        worksheet.write_number(r, 2, parcel.coords.len() as f64)?;
        worksheet.write_number(r, 3, row_count as f64)?;
        worksheet.write_string_with_format(r, 4, &bounds, &text_format)?;
    }

    workbook.save_to_buffer()
}

pub fn generate_excel(state: &PlotState, output_path: &Path, title: &str) -> Result<()> {
    let buffer = generate_excel_buffer(state, title)
        .map_err(|e| PlotError::ExcelGeneration(e.to_string()))?;
    std::fs::write(output_path, buffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_point() {
        assert_eq!(format_point(&LatLng::new(35.5, 139.25)), "35.500000, 139.250000");
    }

    #[test]
    fn test_buffer_is_xlsx() {
        let buffer = generate_excel_buffer(&PlotState::default(), "圃場台帳").expect("生成失敗");
        // xlsxはZIP形式
        assert_eq!(&buffer[..2], b"PK");
    }
}
