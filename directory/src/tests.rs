//! Property tests over the whole directory

#[cfg(test)]
mod tests {
    use crate::directory::Directory;
    use crate::directory::DirectoryConfig;
    use crate::error::DirectoryError;
    use crate::types::OwnedRecord;
    use crate::types::PhoneType;
    use crate::types::Record;
    use proptest::prelude::*;

    fn phone_type() -> impl Strategy<Value = PhoneType> {
        prop::sample::select(PhoneType::ALL.to_vec())
    }

    /// Small alphabets so names and numbers collide often.
    fn entry() -> impl Strategy<Value = (String, String, i64)> {
        ("[a-cA-C]{1,3}", "[1-3]{1,2}", -1i64..6)
    }

    fn owned<'a>(records: impl Iterator<Item = Record<'a>>) -> Vec<OwnedRecord> {
        records.map(|r| r.to_owned_record()).collect()
    }

    #[test]
    fn rejected_duplicate_leaves_single_record() {
        let mut directory = Directory::new();
        directory.insert("Sam", "789-897-778", PhoneType::Home);
        assert_eq!(
            directory.insert_code("Sam", "789-897-778", 4),
            Err(DirectoryError::InvalidPhoneType(4))
        );

        assert_eq!(
            owned(directory.lookup_by_name("sam")),
            vec![OwnedRecord::new("sam", "789-897-778", PhoneType::Home)]
        );
    }

    proptest! {
        #[test]
        fn inserted_records_are_found_by_any_casing(
            name in "[a-zA-Z ]{0,8}",
            number in "[0-9+() -]{0,12}",
            phone_type in phone_type()
        ) {
            let mut directory = Directory::new();
            directory.populate_sample();
            directory.insert(&name, &number, phone_type);

            let query = name.to_uppercase();
            let found = directory
                .lookup_by_name(&query)
                .any(|r| r.number == number && r.phone_type == phone_type);
            prop_assert!(found);
        }

        #[test]
        fn dump_counts_only_accepted_inserts(entries in prop::collection::vec(entry(), 0..40)) {
            let mut directory = Directory::new();
            let mut accepted = 0;
            for (name, number, code) in &entries {
                let before = directory.len();
                match directory.insert_code(name, number, *code) {
                    Ok(()) => accepted += 1,
                    Err(_) => prop_assert_eq!(directory.len(), before),
                }
            }

            prop_assert_eq!(directory.len(), accepted);
            prop_assert_eq!(directory.dump_all().count(), accepted);

            let names: Vec<&str> = directory.dump_all().map(|r| r.name).collect();
            prop_assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
        }

        #[test]
        fn reverse_index_matches_scan(entries in prop::collection::vec(entry(), 0..40)) {
            let mut scanned = Directory::new();
            let mut indexed = Directory::with_config(DirectoryConfig { reverse_index: true });
            for (name, number, code) in &entries {
                let _ = scanned.insert_code(name, number, *code);
                let _ = indexed.insert_code(name, number, *code);
            }

            for (_, number, _) in &entries {
                prop_assert_eq!(
                    owned(scanned.lookup_by_number(number)),
                    owned(indexed.lookup_by_number(number))
                );

                let scanned_positions: Vec<(usize, OwnedRecord)> = scanned
                    .lookup_by_number_positioned(number)
                    .map(|(pos, r)| (pos, r.to_owned_record()))
                    .collect();
                let indexed_positions: Vec<(usize, OwnedRecord)> = indexed
                    .lookup_by_number_positioned(number)
                    .map(|(pos, r)| (pos, r.to_owned_record()))
                    .collect();
                prop_assert_eq!(scanned_positions, indexed_positions);
            }
        }

        #[test]
        fn name_lookup_returns_every_listing(entries in prop::collection::vec(entry(), 1..40)) {
            let mut directory = Directory::new();
            for (name, number, code) in &entries {
                let _ = directory.insert_code(name, number, *code);
            }

            for (name, _, _) in &entries {
                let key = name.to_lowercase();
                let expected = directory.dump_all().filter(|r| r.name == key).count();
                prop_assert_eq!(directory.lookup_by_name(name).count(), expected);

                let positions: Vec<usize> = directory
                    .lookup_by_name_positioned(name)
                    .map(|(pos, _)| pos)
                    .collect();
                let dump_positions: Vec<usize> = directory
                    .dump_all()
                    .enumerate()
                    .filter(|(_, r)| r.name == key)
                    .map(|(idx, _)| idx + 1)
                    .collect();
                prop_assert_eq!(positions, dump_positions);
            }
        }
    }
}
