#[cfg(test)]
mod tests {
    use crate::error::InsightsError;
    use crate::models::{BookingRecord, CountryFilter, FilterState, HotelFilter, HotelType};
    use crate::services::filtering::apply_filter;
    use crate::store::RecordStore;

    fn create_test_record(hotel: HotelType, month: u8, country: Option<&str>, canceled: bool) -> BookingRecord {
        BookingRecord {
            hotel,
            arrival_month: month,
            country: country.map(str::to_string),
            is_canceled: canceled,
            distribution_channel: "Direct".to_string(),
            market_segment: "Direct".to_string(),
            reserved_room_type: "A".to_string(),
            adr: Some(90.0),
        }
    }

    fn sample_store() -> RecordStore {
        RecordStore::from_records(vec![
            create_test_record(HotelType::ResortHotel, 1, Some("PRT"), false),
            create_test_record(HotelType::CityHotel, 3, Some("GBR"), true),
            create_test_record(HotelType::CityHotel, 6, Some("PRT"), false),
            create_test_record(HotelType::ResortHotel, 9, None, true),
            create_test_record(HotelType::CityHotel, 12, Some("ESP"), false),
        ])
    }

    #[test]
    fn test_default_filter_selects_everything() {
        let store = sample_store();
        let view = apply_filter(&store, &FilterState::default()).unwrap();
        assert_eq!(view.len(), store.len());
        assert_eq!(view.records(), store.records());
    }

    #[test]
    fn test_month_range_is_inclusive() {
        let store = sample_store();
        let filter = FilterState::new().with_month_range(3, 9).unwrap();
        let view = apply_filter(&store, &filter).unwrap();
        let months: Vec<u8> = view.iter().map(|r| r.arrival_month).collect();
        assert_eq!(months, vec![3, 6, 9]);
    }

    #[test]
    fn test_country_filter_excludes_missing_country() {
        let store = sample_store();
        let filter = FilterState::new().with_country(CountryFilter::Country("PRT".to_string()));
        let view = apply_filter(&store, &filter).unwrap();
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.country.as_deref() == Some("PRT")));
    }

    #[test]
    fn test_exclude_canceled() {
        let store = sample_store();
        let filter = FilterState::new().with_include_canceled(false);
        let view = apply_filter(&store, &filter).unwrap();
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|r| !r.is_canceled));
    }

    #[test]
    fn test_predicates_combine() {
        let store = sample_store();
        let filter = FilterState::new()
            .with_hotel_type(HotelFilter::Only(HotelType::CityHotel))
            .with_include_canceled(false)
            .with_month_range(1, 6)
            .unwrap();
        let view = apply_filter(&store, &filter).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view.records()[0].arrival_month, 6);
        assert_eq!(view.filter(), &filter);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let store = sample_store();
        let filter = FilterState::new().with_country(CountryFilter::Country("JPN".to_string()));
        let view = apply_filter(&store, &filter).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_blank_country_is_rejected() {
        let store = sample_store();
        let filter = FilterState::new().with_country(CountryFilter::Country("  ".to_string()));
        let err = apply_filter(&store, &filter).unwrap_err();
        assert!(matches!(err, InsightsError::InvalidFilterState { .. }));
    }

    #[test]
    fn test_preview_truncates() {
        let store = sample_store();
        let view = apply_filter(&store, &FilterState::default()).unwrap();
        assert_eq!(view.preview(2).len(), 2);
        assert_eq!(view.preview(2)[0], store.records()[0]);
        assert_eq!(view.preview(100).len(), store.len());
        assert!(view.preview(0).is_empty());
    }
}
