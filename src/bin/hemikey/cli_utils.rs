use hemikey::SelectionCatalog;

/// One numbered line per sector, characters separated by spaces.
pub(crate) fn format_catalog(catalog: &SelectionCatalog) -> String {
    catalog
        .rows()
        .enumerate()
        .map(|(index, row)| {
            let cells: Vec<String> = row.iter().map(char::to_string).collect();
            format!("{}: {}\n", index + 1, cells.join(" "))
        })
        .collect()
}
