use super::*;
use prospector_core::EMAIL_NOT_AVAILABLE;

fn lead(name: &str, stars: u8) -> NormalizedLead {
    NormalizedLead {
        name: name.to_string(),
        address: Some("Calle Larios 1, Málaga".to_string()),
        phone: None,
        maps_link: Some("https://maps.google.com/?cid=1".to_string()),
        email: EMAIL_NOT_AVAILABLE.to_string(),
        stars,
        slug: slugify(name),
        email_subject: format!("Asunto {name}"),
        email_body: format!("Hola {name},\n\nCuerpo."),
        chat_message: format!("Hola {name}"),
    }
}

#[test]
fn empty_collection_produces_no_output() {
    assert_eq!(to_csv(&[]).expect("to_csv"), None);
}

#[test]
fn header_row_is_first_and_quoted() {
    let csv = to_csv(&[lead("Bar Pepe", 3)]).expect("to_csv").expect("output");
    let header = csv.lines().next().expect("header line");
    assert_eq!(
        header,
        r#""Name","Address","Phone","Email","Maps Link","Stars","Email Subject","Email Body","Chat Message""#
    );
}

#[test]
fn every_field_is_quoted_and_missing_values_are_empty() {
    let mut row = lead("Café Luz", 0);
    row.email_body = "Cuerpo".to_string();
    let csv = to_csv(&[row]).expect("to_csv").expect("output");

    let data = csv.lines().nth(1).expect("data line");
    assert_eq!(
        data,
        r#""Café Luz","Calle Larios 1, Málaga","","No disponible","https://maps.google.com/?cid=1","0","Asunto Café Luz","Cuerpo","Hola Café Luz""#
    );
}

#[test]
fn embedded_quotes_are_doubled() {
    let csv = to_csv(&[lead(r#"Bar "El Chiringuito""#, 2)])
        .expect("to_csv")
        .expect("output");
    assert!(csv.contains(r#""Bar ""El Chiringuito""""#), "{csv}");
}

#[test]
fn no_trailing_newline() {
    let csv = to_csv(&[lead("Bar Pepe", 3), lead("Café Luz", 0)])
        .expect("to_csv")
        .expect("output");
    assert!(!csv.ends_with('\n'));
    assert!(csv.ends_with(r#""Hola Café Luz""#));
}

#[test]
fn round_trips_through_csv_reader() {
    let mut tricky = lead(r#"Taberna "La Viña", S.L."#, 5);
    tricky.phone = Some("+34 952, ext. 2".to_string());
    let leads = vec![tricky, lead("Café Luz", 1)];

    let csv = to_csv(&leads).expect("to_csv").expect("output");
    let mut reader = csv::Reader::from_reader(csv.as_bytes());

    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADERS.to_vec());

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("records");
    assert_eq!(records.len(), 2);

    let first = &records[0];
    assert_eq!(&first[0], r#"Taberna "La Viña", S.L."#);
    assert_eq!(&first[2], "+34 952, ext. 2");
    assert_eq!(&first[5], "5");
    assert_eq!(&first[7], "Hola Taberna \"La Viña\", S.L.,\n\nCuerpo.");
    assert_eq!(&records[1][0], "Café Luz");
    assert_eq!(&records[1][2], "");
}

#[test]
fn write_csv_file_writes_utf8_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("leads.csv");

    let written = write_csv_file(&[lead("Café Luz", 4)], &path).expect("write");
    assert_eq!(written.as_deref(), Some(path.as_path()));

    let contents = std::fs::read_to_string(&path).expect("read back");
    assert!(contents.starts_with(r#""Name","#));
    assert!(contents.contains("Café Luz"));
}

#[test]
fn write_csv_file_skips_empty_collection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("leads.csv");

    assert_eq!(write_csv_file(&[], &path).expect("write"), None);
    assert!(!path.exists());
}

#[test]
fn write_csv_file_reports_io_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing-dir").join("leads.csv");

    let err = write_csv_file(&[lead("Bar Pepe", 3)], &path).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
}

#[test]
fn export_file_name_uses_city_slug() {
    assert_eq!(export_file_name("Sevilla"), "leads-sevilla.csv");
    assert_eq!(export_file_name("Vélez Málaga"), "leads-vlez-mlaga.csv");
    assert_eq!(export_file_name("???"), "leads.csv");
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_field() -> impl Strategy<Value = String> {
        prop_oneof![
            any::<String>(),
            "[a-zA-Z0-9 áñ\",;\n\r\t'☕-]{0,30}",
        ]
    }

    prop_compose! {
        fn arb_lead()(
            name in arb_field(),
            address in proptest::option::of(arb_field()),
            phone in proptest::option::of(arb_field()),
            maps_link in proptest::option::of(arb_field()),
            email in arb_field(),
            stars in 0u8..=5,
            email_subject in arb_field(),
            email_body in arb_field(),
            chat_message in arb_field()
        ) -> NormalizedLead {
            NormalizedLead {
                slug: slugify(&name),
                name,
                address,
                phone,
                maps_link,
                email,
                stars,
                email_subject,
                email_body,
                chat_message,
            }
        }
    }

    fn expected_cells(lead: &NormalizedLead) -> Vec<String> {
        vec![
            lead.name.clone(),
            lead.address.clone().unwrap_or_default(),
            lead.phone.clone().unwrap_or_default(),
            lead.email.clone(),
            lead.maps_link.clone().unwrap_or_default(),
            lead.stars.to_string(),
            lead.email_subject.clone(),
            lead.email_body.clone(),
            lead.chat_message.clone(),
        ]
    }

    proptest! {
        #[test]
        fn csv_reader_recovers_every_cell(leads in proptest::collection::vec(arb_lead(), 1..8)) {
            let csv = to_csv(&leads).expect("to_csv").expect("output");
            prop_assert!(!csv.ends_with('\n'));

            let mut reader = csv::Reader::from_reader(csv.as_bytes());
            let headers = reader.headers().expect("headers").clone();
            prop_assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADERS.to_vec());

            let records: Vec<csv::StringRecord> = reader
                .records()
                .collect::<Result<_, _>>()
                .expect("records");
            prop_assert_eq!(records.len(), leads.len());

            for (record, lead) in records.iter().zip(&leads) {
                let cells: Vec<String> = record.iter().map(str::to_string).collect();
                prop_assert_eq!(cells, expected_cells(lead));
            }
        }

        #[test]
        fn every_cell_is_quoted(leads in proptest::collection::vec(arb_lead(), 1..4)) {
            let csv = to_csv(&leads).expect("to_csv").expect("output");
            prop_assert!(csv.starts_with('"'));
            prop_assert!(csv.ends_with('"'));
        }
    }
}
