//! GeoJSON出力
//!
//! 区画はPolygon、畝はLineStringのFeatureとして1つのFeatureCollectionにまとめる。
//! GeoJSONの座標順は [経度, 緯度]。

use crate::error::{PlotError, Result};
use geojson::{feature::Id, Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use plot_tracker_common::{LatLng, Parcel, PlotState, Row};
use std::path::Path;

fn position(p: &LatLng) -> Vec<f64> {
    vec![p.lng, p.lat]
}

/// 閉じたリング（先頭点を末尾に追加）
fn closed_ring(coords: &[LatLng]) -> Vec<Vec<f64>> {
    let mut ring: Vec<Vec<f64>> = coords.iter().map(position).collect();
    if let (Some(first), Some(last)) = (coords.first(), coords.last()) {
        if first != last {
            ring.push(position(first));
        }
    }
    ring
}

fn parcel_feature(parcel: &Parcel) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("kind".to_string(), JsonValue::from("parcel"));
    properties.insert("name".to_string(), JsonValue::from(parcel.meta.name.clone()));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![closed_ring(&parcel.coords)]))),
        id: Some(Id::String(parcel.id.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

fn row_feature(row: &Row) -> Feature {
    let meta = &row.meta;
    let mut properties = JsonObject::new();
    properties.insert("kind".to_string(), JsonValue::from("row"));
    properties.insert("species".to_string(), JsonValue::from(meta.species.clone()));
    properties.insert("sowingDate".to_string(), JsonValue::from(meta.sowing_date.clone()));
    properties.insert("plantingDate".to_string(), JsonValue::from(meta.planting_date.clone()));
    properties.insert("notes".to_string(), JsonValue::from(meta.notes.clone()));
    properties.insert("photo".to_string(), JsonValue::from(meta.photo.clone()));
    properties.insert(
        "parcelId".to_string(),
        meta.parcel_id.clone().map(JsonValue::from).unwrap_or(JsonValue::Null),
    );

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(
            row.coords.iter().map(position).collect(),
        ))),
        id: Some(Id::String(row.id.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

pub fn to_feature_collection(state: &PlotState) -> FeatureCollection {
    let features = state
        .parcels
        .iter()
        .map(parcel_feature)
        .chain(state.rows.iter().map(row_feature))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

pub fn write_geojson(state: &PlotState, output_path: &Path) -> Result<()> {
    let collection = to_feature_collection(state);
    let json = serde_json::to_string_pretty(&collection)
        .map_err(|e| PlotError::GeoJsonGeneration(format!("シリアライズ失敗: {}", e)))?;
    std::fs::write(output_path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plot_tracker_common::{ParcelMeta, RowMeta};

    fn sample_state() -> PlotState {
        PlotState {
            parcels: vec![Parcel {
                id: "p1".to_string(),
                coords: vec![LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0), LatLng::new(1.0, 1.0)],
                meta: ParcelMeta { name: "区画1".to_string() },
            }],
            rows: vec![Row {
                id: "r1".to_string(),
                coords: vec![LatLng::new(0.3, 0.2), LatLng::new(0.6, 0.5)],
                meta: RowMeta {
                    species: "レタス".to_string(),
                    parcel_id: Some("p1".to_string()),
                    ..Default::default()
                },
            }],
        }
    }

    #[test]
    fn test_polygon_ring_is_closed() {
        let collection = to_feature_collection(&sample_state());
        let geometry = collection.features[0].geometry.as_ref().expect("ジオメトリなし");
        match &geometry.value {
            Value::Polygon(rings) => {
                assert_eq!(rings[0].len(), 4);
                assert_eq!(rings[0].first(), rings[0].last());
            }
            other => panic!("unexpected geometry: {:?}", other),
        }
    }

    #[test]
    fn test_line_uses_lng_lat_order() {
        let collection = to_feature_collection(&sample_state());
        let geometry = collection.features[1].geometry.as_ref().expect("ジオメトリなし");
        match &geometry.value {
            Value::LineString(points) => {
                assert_eq!(points[0], vec![0.2, 0.3]);
            }
            other => panic!("unexpected geometry: {:?}", other),
        }
    }

    #[test]
    fn test_row_properties() {
        let collection = to_feature_collection(&sample_state());
        let props = collection.features[1].properties.as_ref().expect("プロパティなし");
        assert_eq!(props.get("species"), Some(&JsonValue::from("レタス")));
        assert_eq!(props.get("parcelId"), Some(&JsonValue::from("p1")));
        assert_eq!(props.get("kind"), Some(&JsonValue::from("row")));
    }
}
