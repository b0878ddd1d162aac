#[cfg(test)]
mod tests {
    use crate::models::{BookingRecord, FilterState, HotelType};
    use crate::services::cancellations::compute_cancellations;
    use crate::services::filtering::FilteredView;
    use crate::services::geographic::{compute_geographic, sort_by_total_desc};
    use crate::services::market_segments::compute_market_segments;
    use crate::services::monthly::{compute_monthly, series_for};
    use crate::services::price_distribution::compute_price_by_room_type;

    fn create_test_record(
        hotel: HotelType,
        month: u8,
        country: Option<&str>,
        canceled: bool,
    ) -> BookingRecord {
        BookingRecord {
            hotel,
            arrival_month: month,
            country: country.map(str::to_string),
            is_canceled: canceled,
            distribution_channel: "TA/TO".to_string(),
            market_segment: "Online TA".to_string(),
            reserved_room_type: "A".to_string(),
            adr: Some(100.0),
        }
    }

    fn view_of(records: Vec<BookingRecord>) -> FilteredView {
        FilteredView::new(FilterState::default(), records)
    }

    #[test]
    fn test_all_aggregators_empty() {
        let view = view_of(Vec::new());

        assert!(compute_geographic(&view).is_empty());
        assert!(compute_monthly(&view).is_empty());
        assert!(compute_cancellations(&view).is_empty());
        assert!(compute_market_segments(&view).is_empty());
        let price = compute_price_by_room_type(&view);
        assert!(price.groups.is_empty());
        assert_eq!(price.excluded_invalid_adr, 0);
    }

    #[test]
    fn test_geographic_split_by_hotel() {
        let view = view_of(vec![
            create_test_record(HotelType::CityHotel, 7, Some("PRT"), false),
            create_test_record(HotelType::ResortHotel, 7, Some("PRT"), false),
            create_test_record(HotelType::ResortHotel, 8, Some("PRT"), true),
            create_test_record(HotelType::CityHotel, 8, Some("GBR"), false),
            create_test_record(HotelType::CityHotel, 8, None, false),
        ]);

        let rows = compute_geographic(&view);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country, "GBR");
        assert_eq!((rows[0].city_count, rows[0].resort_count, rows[0].total), (1, 0, 1));
        assert_eq!(rows[1].country, "PRT");
        assert_eq!((rows[1].city_count, rows[1].resort_count, rows[1].total), (1, 2, 3));
    }

    #[test]
    fn test_geographic_sort_by_total() {
        let view = view_of(vec![
            create_test_record(HotelType::CityHotel, 1, Some("AUT"), false),
            create_test_record(HotelType::CityHotel, 1, Some("ESP"), false),
            create_test_record(HotelType::CityHotel, 1, Some("ESP"), false),
            create_test_record(HotelType::CityHotel, 1, Some("BEL"), false),
        ]);

        let mut rows = compute_geographic(&view);
        sort_by_total_desc(&mut rows);
        let order: Vec<&str> = rows.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(order, vec!["ESP", "AUT", "BEL"]);
    }

    #[test]
    fn test_monthly_orders_and_omits_empty_months() {
        let view = view_of(vec![
            create_test_record(HotelType::ResortHotel, 8, None, false),
            create_test_record(HotelType::ResortHotel, 2, None, false),
            create_test_record(HotelType::CityHotel, 12, None, false),
            create_test_record(HotelType::ResortHotel, 8, None, true),
        ]);

        let rows = compute_monthly(&view);
        let tuples: Vec<(HotelType, u8, usize)> = rows
            .iter()
            .map(|r| (r.hotel, r.month, r.guest_count))
            .collect();
        assert_eq!(
            tuples,
            vec![
                (HotelType::CityHotel, 12, 1),
                (HotelType::ResortHotel, 2, 1),
                (HotelType::ResortHotel, 8, 2),
            ]
        );

        let resort = series_for(&rows, HotelType::ResortHotel);
        assert_eq!(resort.len(), 2);
        assert!(resort.iter().all(|r| r.hotel == HotelType::ResortHotel));
    }

    #[test]
    fn test_cancellations_ordering() {
        let mut records = Vec::new();
        for (hotel, channel, n) in [
            (HotelType::CityHotel, "TA/TO", 3),
            (HotelType::ResortHotel, "Direct", 2),
            (HotelType::CityHotel, "Corporate", 2),
            (HotelType::ResortHotel, "Corporate", 2),
        ] {
            for _ in 0..n {
                let mut record = create_test_record(hotel, 5, Some("PRT"), true);
                record.distribution_channel = channel.to_string();
                records.push(record);
            }
        }
        records.push(create_test_record(HotelType::CityHotel, 5, Some("PRT"), false));

        let rows = compute_cancellations(&view_of(records));
        let tuples: Vec<(&str, HotelType, usize)> = rows
            .iter()
            .map(|r| (r.distribution_channel.as_str(), r.hotel, r.cancellation_count))
            .collect();
        assert_eq!(
            tuples,
            vec![
                ("TA/TO", HotelType::CityHotel, 3),
                ("Corporate", HotelType::CityHotel, 2),
                ("Corporate", HotelType::ResortHotel, 2),
                ("Direct", HotelType::ResortHotel, 2),
            ]
        );
    }

    #[test]
    fn test_market_segments_zero_fill() {
        let mut groups = create_test_record(HotelType::CityHotel, 5, None, false);
        groups.market_segment = "Groups".to_string();
        let mut direct = create_test_record(HotelType::ResortHotel, 5, None, false);
        direct.market_segment = "Direct".to_string();
        let online = create_test_record(HotelType::ResortHotel, 5, None, false);

        let rows = compute_market_segments(&view_of(vec![groups, direct, online.clone(), online]));
        assert_eq!(rows.len(), 6);

        let tuples: Vec<(&str, HotelType, usize)> = rows
            .iter()
            .map(|r| (r.market_segment.as_str(), r.hotel, r.guest_count))
            .collect();
        assert_eq!(
            tuples,
            vec![
                ("Online TA", HotelType::ResortHotel, 2),
                ("Direct", HotelType::ResortHotel, 1),
                ("Groups", HotelType::CityHotel, 1),
                ("Direct", HotelType::CityHotel, 0),
                ("Groups", HotelType::ResortHotel, 0),
                ("Online TA", HotelType::CityHotel, 0),
            ]
        );
    }

    #[test]
    fn test_market_segments_single_hotel_has_no_zero_rows() {
        let rows = compute_market_segments(&view_of(vec![create_test_record(
            HotelType::CityHotel,
            1,
            None,
            false,
        )]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].hotel, HotelType::CityHotel);
    }

    #[test]
    fn test_price_excludes_canceled_and_invalid_adr() {
        let mut cheap = create_test_record(HotelType::CityHotel, 1, None, false);
        cheap.adr = Some(50.0);
        let mut canceled = create_test_record(HotelType::CityHotel, 1, None, true);
        canceled.adr = Some(1_000.0);
        let mut unknown = create_test_record(HotelType::CityHotel, 1, None, false);
        unknown.adr = None;
        let mut suite = create_test_record(HotelType::ResortHotel, 1, None, false);
        suite.reserved_room_type = "G".to_string();

        let data = compute_price_by_room_type(&view_of(vec![
            cheap,
            canceled,
            unknown,
            suite,
            create_test_record(HotelType::CityHotel, 1, None, false),
        ]));

        assert_eq!(data.excluded_invalid_adr, 1);
        assert_eq!(data.groups.len(), 2);

        let city_a = &data.groups[0];
        assert_eq!(city_a.reserved_room_type, "A");
        assert_eq!(city_a.hotel, HotelType::CityHotel);
        assert_eq!(city_a.count, 2);
        assert_eq!(city_a.min, 50.0);
        assert_eq!(city_a.max, 100.0);
        assert_eq!(city_a.mean, 75.0);

        let resort_g = &data.groups[1];
        assert_eq!(resort_g.reserved_room_type, "G");
        assert_eq!(resort_g.count, 1);
        assert_eq!(resort_g.median, 100.0);
        assert!(resort_g.outliers.is_empty());
    }
}
