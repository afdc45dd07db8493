use super::*;
use records::entity::{InspectionKind, InspectionStatus};

fn inspection(id: i64) -> Inspection {
    Inspection {
        inspection_id: id,
        vehicle_id: 3,
        user_id: 4,
        kind: InspectionKind::PostTrip,
        date: "2024-04-04".to_owned(),
        signed_by: "M. Nkosi".to_owned(),
        status: InspectionStatus::Completed,
    }
}

#[test]
fn find_row_matches_record_id() {
    let rows = vec![inspection(1), inspection(2)];
    assert_eq!(find_row(&rows, 2).map(|i| i.inspection_id), Some(2));
    assert_eq!(find_row(&rows, 9), None);
}

#[test]
fn inspection_detail_lists_type_and_signer() {
    let (title, rows) = detail_content(&Detail::Inspection(inspection(1)));
    assert_eq!(title, "Inspection Details");
    assert!(rows.contains(&("Type", "post_trip".to_owned())));
    assert!(rows.contains(&("Signed By", "M. Nkosi".to_owned())));
}
