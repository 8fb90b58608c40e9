use super::*;

#[test]
fn every_acknowledgement_maps_to_a_distinct_flag() {
    for index in 0..ACKNOWLEDGEMENTS.len() {
        let mut form = QuoteForm::default();
        *acknowledgement_mut(&mut form, index).unwrap() = true;
        let set = (0..ACKNOWLEDGEMENTS.len()).filter(|&i| acknowledged(&form, i)).collect::<Vec<_>>();
        assert_eq!(set, vec![index]);
    }
}

#[test]
fn out_of_range_acknowledgement_is_ignored() {
    let mut form = QuoteForm::default();
    assert!(acknowledgement_mut(&mut form, ACKNOWLEDGEMENTS.len()).is_none());
    assert!(!acknowledged(&form, ACKNOWLEDGEMENTS.len()));
}

#[test]
fn ticking_every_box_satisfies_validation() {
    let mut form = QuoteForm {
        name: "Ana Pilot".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: "802-555-0100".to_owned(),
        ..QuoteForm::default()
    };
    assert_eq!(forms::validate_quote(&form), Err(forms::ACKNOWLEDGEMENTS_REQUIRED));
    for index in 0..ACKNOWLEDGEMENTS.len() {
        if let Some(flag) = acknowledgement_mut(&mut form, index) {
            *flag = true;
        }
    }
    assert_eq!(forms::validate_quote(&form), Ok(()));
}
