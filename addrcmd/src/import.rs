//! Paired batch import.
//!
//! Reading is split in two layers. The per-source readers are lenient: they
//! validate every token but keep row positions intact (a member row with no
//! members becomes an empty list). The `import_*` functions then enforce the
//! pairing rules: equal row counts, and for groups no empty member rows.

use netobj_core::{AddressError, AddressLiteral, Batch, Name, NameError, RecordFormat};
use thiserror::Error;
use tracing::debug;

use crate::generate::{AddressRecord, GroupRecord};

/// What a column of names is used for; only affects error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRole {
    Address,
    Group,
    Member,
}

impl NameRole {
    fn label(self) -> &'static str {
        match self {
            NameRole::Address => "address name",
            NameRole::Group => "group name",
            NameRole::Member => "member name",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            NameRole::Address => "names",
            NameRole::Group => "groups",
            NameRole::Member => "members",
        }
    }
}

/// Reasons a batch import is rejected. Any of these aborts the whole batch.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("line {line}: invalid {}: {source}", .role.label())]
    InvalidName {
        role: NameRole,
        line: u64,
        source: NameError,
    },
    #[error("line {line}: {source}")]
    InvalidAddress { line: u64, source: AddressError },
    #[error("count mismatch: {left} {left_label}, {right} {right_label}")]
    CountMismatch {
        left_label: &'static str,
        left: usize,
        right_label: &'static str,
        right: usize,
    },
    #[error("no valid {0} found in input")]
    EmptyBatch(&'static str),
    #[error("group {group} has no members (member line {line})")]
    MissingMembers { group: Name, line: u64 },
}

/// Members read from one row of a members source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    /// Source line the row starts on.
    pub line: u64,
    pub members: Vec<Name>,
}

/// Read names, one per row. Blank rows are skipped.
pub fn read_names(batch: &Batch, role: NameRole) -> Result<Vec<Name>, ImportError> {
    let mut names = Vec::new();
    for (line, value) in first_cells(batch) {
        let name = Name::parse(value).map_err(|source| ImportError::InvalidName {
            role,
            line,
            source,
        })?;
        names.push(name);
    }
    if names.is_empty() {
        return Err(ImportError::EmptyBatch(role.plural()));
    }
    Ok(names)
}

/// Read and normalize addresses, one per row. Blank rows are skipped.
pub fn read_addresses(batch: &Batch) -> Result<Vec<AddressLiteral>, ImportError> {
    let mut addresses = Vec::new();
    for (line, value) in first_cells(batch) {
        let address = AddressLiteral::normalize(value)
            .map_err(|source| ImportError::InvalidAddress { line, source })?;
        addresses.push(address);
    }
    if addresses.is_empty() {
        return Err(ImportError::EmptyBatch("addresses"));
    }
    Ok(addresses)
}

/// Read one member list per row.
///
/// CSV rows take members from the second column on; line rows are split on
/// commas. Rows without members are kept as empty lists so positions still
/// line up with the groups source.
pub fn read_members(batch: &Batch) -> Result<Vec<MemberRow>, ImportError> {
    if batch.is_empty() {
        return Err(ImportError::EmptyBatch("member rows"));
    }

    let mut rows = Vec::with_capacity(batch.len());
    for row in &batch.rows {
        let cells: Vec<&str> = match batch.format {
            RecordFormat::Csv => row.cells.iter().skip(1).map(String::as_str).collect(),
            RecordFormat::Lines => row.cells.iter().flat_map(|text| text.split(',')).collect(),
        };
        let mut members = Vec::new();
        for cell in cells.into_iter().map(str::trim).filter(|c| !c.is_empty()) {
            let member = Name::parse(cell).map_err(|source| ImportError::InvalidName {
                role: NameRole::Member,
                line: row.line,
                source,
            })?;
            members.push(member);
        }
        rows.push(MemberRow {
            line: row.line,
            members,
        });
    }
    Ok(rows)
}

/// Pair names with addresses strictly by position.
pub fn import_addresses(names: &Batch, addresses: &Batch) -> Result<Vec<AddressRecord>, ImportError> {
    let names = read_names(names, NameRole::Address)?;
    let addresses = read_addresses(addresses)?;
    ensure_same_count("names", names.len(), "addresses", addresses.len())?;

    let records: Vec<AddressRecord> = names
        .into_iter()
        .zip(addresses)
        .map(|(name, address)| AddressRecord { name, address })
        .collect();
    debug!(records = records.len(), "paired address records");
    Ok(records)
}

/// Pair group names with member rows strictly by position.
pub fn import_groups(groups: &Batch, members: &Batch) -> Result<Vec<GroupRecord>, ImportError> {
    let groups = read_names(groups, NameRole::Group)?;
    let member_rows = read_members(members)?;
    ensure_same_count("groups", groups.len(), "member rows", member_rows.len())?;

    if let Some(idx) = member_rows.iter().position(|row| row.members.is_empty()) {
        return Err(ImportError::MissingMembers {
            group: groups[idx].clone(),
            line: member_rows[idx].line,
        });
    }

    let records: Vec<GroupRecord> = groups
        .into_iter()
        .zip(member_rows)
        .map(|(group, row)| GroupRecord {
            group,
            members: row.members,
        })
        .collect();
    debug!(groups = records.len(), "paired group records");
    Ok(records)
}

fn ensure_same_count(
    left_label: &'static str,
    left: usize,
    right_label: &'static str,
    right: usize,
) -> Result<(), ImportError> {
    if left != right {
        return Err(ImportError::CountMismatch {
            left_label,
            left,
            right_label,
            right,
        });
    }
    Ok(())
}

/// Trimmed first cell of every non-blank row, with its source line.
fn first_cells(batch: &Batch) -> impl Iterator<Item = (u64, &str)> {
    batch.rows.iter().filter_map(|row| {
        let value = row.cells.first()?.trim();
        (!value.is_empty()).then_some((row.line, value))
    })
}

#[cfg(test)]
mod tests {
    use netobj_core::{parse_batch, Batch, RecordFormat};
    use pretty_assertions::assert_eq;

    use super::{
        import_addresses, import_groups, read_addresses, read_members, read_names, ImportError,
        NameRole,
    };

    fn csv(text: &str) -> Batch {
        parse_batch(text, RecordFormat::Csv).expect("csv")
    }

    fn lines(text: &str) -> Batch {
        parse_batch(text, RecordFormat::Lines).expect("lines")
    }

    #[test]
    fn names_skip_blank_rows_and_use_first_csv_column() {
        let names = read_names(&csv("web1,ignored\n ,x\ndb1\n"), NameRole::Address).expect("names");
        assert_eq!(names.iter().map(|n| n.as_str()).collect::<Vec<_>>(), vec!["web1", "db1"]);

        let names = read_names(&lines("  web1 \n\n db1\n"), NameRole::Address).expect("names");
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn invalid_name_reports_role_and_line() {
        let err = read_names(&lines("ok\nbad name\n"), NameRole::Group).expect_err("invalid");
        assert!(matches!(err, ImportError::InvalidName { line: 2, role: NameRole::Group, .. }));
        assert_eq!(
            err.to_string(),
            "line 2: invalid group name: invalid name \"bad name\": must not contain whitespace or \"/\""
        );
    }

    #[test]
    fn empty_sources_are_rejected() {
        assert!(matches!(
            read_names(&lines("\n \n"), NameRole::Address),
            Err(ImportError::EmptyBatch("names"))
        ));
        assert!(matches!(
            read_addresses(&lines("")),
            Err(ImportError::EmptyBatch("addresses"))
        ));
        assert!(matches!(
            read_members(&lines("")),
            Err(ImportError::EmptyBatch("member rows"))
        ));
    }

    #[test]
    fn addresses_are_normalized() {
        let addrs = read_addresses(&lines("10.0.0.1\n10.1.2.3/24\n")).expect("addresses");
        let rendered: Vec<String> = addrs.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["10.0.0.1/32", "10.1.2.0/24"]);
    }

    #[test]
    fn invalid_address_aborts_with_line() {
        let err = read_addresses(&lines("10.0.0.1\n10.0.0.999\n")).expect_err("invalid");
        assert_eq!(err.to_string(), "line 2: invalid IP address: \"10.0.0.999\"");
    }

    #[test]
    fn csv_errors_point_at_the_physical_line() {
        let err = read_addresses(&csv("10.0.0.1\n\n\n10.0.0.999,web\n")).expect_err("invalid");
        assert!(matches!(err, ImportError::InvalidAddress { line: 4, .. }));
        assert_eq!(err.to_string(), "line 4: invalid IP address: \"10.0.0.999\"");

        let err = read_members(&csv("g1,a\n\ng2,b c\n")).expect_err("invalid member");
        assert!(matches!(err, ImportError::InvalidName { line: 3, role: NameRole::Member, .. }));
    }

    #[test]
    fn member_rows_keep_alignment() {
        let rows = read_members(&lines("a, b\n\n ,c\n")).expect("members");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].members.len(), 2);
        assert!(rows[1].members.is_empty());
        assert_eq!(rows[2].members[0].as_str(), "c");
        assert_eq!(rows.iter().map(|r| r.line).collect::<Vec<_>>(), vec![1, 2, 3]);

        let rows = read_members(&csv("g1,a,,b\ng2\n")).expect("members");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].members.len(), 2);
        assert!(rows[1].members.is_empty());
    }

    #[test]
    fn address_import_pairs_by_position() {
        let records =
            import_addresses(&lines("web1\ndb1\n"), &lines("10.0.0.1\n10.0.0.2/31\n")).expect("import");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name.as_str(), "db1");
        assert_eq!(records[1].address.to_string(), "10.0.0.2/31");
    }

    #[test]
    fn address_import_rejects_count_mismatch() {
        let err = import_addresses(&lines("n1\nn2\n"), &lines("1.1.1.1\n")).expect_err("mismatch");
        assert!(matches!(
            err,
            ImportError::CountMismatch {
                left: 2,
                right: 1,
                ..
            }
        ));
        assert_eq!(err.to_string(), "count mismatch: 2 names, 1 addresses");
    }

    #[test]
    fn group_import_rejects_row_without_members() {
        let err = import_groups(&lines("g1\ng2\n"), &lines("a,b\n , \n")).expect_err("missing");
        match err {
            ImportError::MissingMembers { group, line } => {
                assert_eq!(group.as_str(), "g2");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_members_names_the_csv_source_line() {
        let err = import_groups(&lines("g1\ng2\n"), &csv("g1,a\n\n\ng2\n")).expect_err("missing");
        assert_eq!(err.to_string(), "group g2 has no members (member line 4)");
    }

    #[test]
    fn group_import_rejects_count_mismatch_before_member_check() {
        let err = import_groups(&lines("g1\ng2\n"), &lines("a\n")).expect_err("mismatch");
        assert_eq!(err.to_string(), "count mismatch: 2 groups, 1 member rows");
    }

    #[test]
    fn group_import_from_shared_csv() {
        let batch = csv("grp-web,web1,web2\ngrp-db,db1\n");
        let records = import_groups(&batch, &batch).expect("import");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].group.as_str(), "grp-web");
        assert_eq!(records[0].members.len(), 2);
        assert_eq!(records[1].members[0].as_str(), "db1");
    }
}
