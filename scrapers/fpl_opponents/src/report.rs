use tracing::{debug, warn};

use crate::{error::Result, resolver::TeamTable, types::Fixture};

/// Opponent short code for one (team, round) cell; `None` is a blank gameweek.
pub type Opponent = Option<String>;

const NO_FIXTURE: &str = "None";

pub fn round_label(round: u32) -> String {
    format!("GW{}", round)
}

/// Fixtures whose gameweek is one of `rounds`. Unscheduled fixtures are dropped.
pub fn filter_fixtures<'a>(fixtures: &'a [Fixture], rounds: &[u32]) -> Vec<&'a Fixture> {
    fixtures
        .iter()
        .filter(|f| f.event.map_or(false, |event| rounds.contains(&event)))
        .collect()
}

/// First fixture in `round` with `team_id` on either side.
pub fn find_fixture<'a>(fixtures: &[&'a Fixture], round: u32, team_id: u32) -> Option<&'a Fixture> {
    let mut matches = fixtures
        .iter()
        .copied()
        .filter(|f| f.event == Some(round) && f.involves(team_id));
    let first = matches.next()?;
    debug!(
        "Team {} plays fixture {:?} in {} (kickoff {:?})",
        team_id,
        first.id,
        round_label(round),
        first.kickoff_time
    );
    let extra = matches.count();
    if extra > 0 {
        warn!(
            "Team {} has {} extra fixture(s) in {}; using the first one",
            team_id,
            extra,
            round_label(round)
        );
    }
    Some(first)
}

pub fn opponent_id(fixture: &Fixture, team_id: u32) -> u32 {
    if fixture.team_h == team_id {
        fixture.team_a
    } else {
        fixture.team_h
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    teams: Vec<String>,
    rounds: Vec<u32>,
    cells: Vec<Vec<Opponent>>,
}

impl ReportTable {
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn rounds(&self) -> &[u32] {
        &self.rounds
    }

    pub fn column_labels(&self) -> Vec<String> {
        self.rounds.iter().map(|r| round_label(*r)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Opponent])> {
        self.teams
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(Vec::as_slice))
    }

    /// `None` when the team or round is not part of the report.
    pub fn get(&self, team: &str, round: u32) -> Option<&Opponent> {
        let row = self.teams.iter().position(|t| t == team)?;
        let col = self.rounds.iter().position(|r| *r == round)?;
        Some(&self.cells[row][col])
    }

    pub fn header(&self) -> String {
        let teams = if self.teams.is_empty() {
            "no teams".to_string()
        } else {
            self.teams.join(", ")
        };
        format!("=== Opponents for {} in {} ===", teams, self.rounds_summary())
    }

    fn rounds_summary(&self) -> String {
        match self.rounds.as_slice() {
            [] => "no gameweeks".to_string(),
            [only] => round_label(*only),
            [first, .., last] if is_consecutive(&self.rounds) => {
                format!("{}-{}", round_label(*first), last)
            }
            _ => self.column_labels().join(", "),
        }
    }

    /// Plain-text table: team codes down the left, one right-aligned column per gameweek.
    pub fn render_table(&self) -> String {
        let labels = self.column_labels();
        let index_width = self.teams.iter().map(|t| t.len()).max().unwrap_or(0);
        let widths: Vec<usize> = labels
            .iter()
            .enumerate()
            .map(|(col, label)| {
                self.cells
                    .iter()
                    .map(|row| cell_text(&row[col]).len())
                    .chain(std::iter::once(label.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&" ".repeat(index_width));
        for (label, width) in labels.iter().zip(&widths) {
            out.push_str(&format!("  {:>width$}", label, width = width));
        }
        out.push('\n');

        for (team, row) in self.rows() {
            out.push_str(&format!("{:<width$}", team, width = index_width));
            for (cell, width) in row.iter().zip(&widths) {
                out.push_str(&format!("  {:>width$}", cell_text(cell), width = width));
            }
            out.push('\n');
        }
        out
    }

    /// What gets printed to stdout: a blank line, the header, then the table.
    pub fn render_console(&self) -> String {
        format!("\n{}\n{}", self.header(), self.render_table())
    }
}

fn is_consecutive(rounds: &[u32]) -> bool {
    rounds.windows(2).all(|w| w[0].checked_add(1) == Some(w[1]))
}

fn cell_text(cell: &Opponent) -> &str {
    cell.as_deref().unwrap_or(NO_FIXTURE)
}

/// Resolves every (team, round) pair to an opponent code.
///
/// Teams are the outer loop and rounds the inner one, both in the order given,
/// so the table layout never depends on fixture order. An unknown team code or
/// an opponent id missing from `teams` aborts the whole report.
pub fn build_report(
    teams: &TeamTable,
    fixtures: &[Fixture],
    team_codes: &[String],
    rounds: &[u32],
) -> Result<ReportTable> {
    let targeted = filter_fixtures(fixtures, rounds);
    debug!("{} of {} fixtures fall in the target gameweeks", targeted.len(), fixtures.len());

    let mut cells = Vec::with_capacity(team_codes.len());
    for code in team_codes {
        let team_id = teams.team_id(code)?;
        let mut row = Vec::with_capacity(rounds.len());
        for &round in rounds {
            let opponent = match find_fixture(&targeted, round, team_id) {
                Some(fixture) => {
                    let opp = teams.team_short_name(opponent_id(fixture, team_id))?;
                    Some(opp.to_string())
                }
                None => {
                    debug!("{} has no fixture in {}", code, round_label(round));
                    None
                }
            };
            row.push(opponent);
        }
        cells.push(row);
    }

    Ok(ReportTable {
        teams: team_codes.to_vec(),
        rounds: rounds.to_vec(),
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::FplError, types::Team};
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn two_teams() -> TeamTable {
        TeamTable::new(vec![Team::new(1, "BHA"), Team::new(2, "AVL")])
    }

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_home_and_away_opponents() {
        let fixtures = vec![Fixture::new(Some(12), 1, 2)];
        let report = build_report(&two_teams(), &fixtures, &codes(&["BHA", "AVL"]), &[12]).unwrap();

        assert_eq!(report.get("BHA", 12), Some(&Some("AVL".to_string())));
        assert_eq!(report.get("AVL", 12), Some(&Some("BHA".to_string())));
        assert_eq!(report.column_labels(), vec!["GW12"]);
    }

    #[test]
    fn test_no_fixtures_gives_blank_cells() {
        let report = build_report(&two_teams(), &[], &codes(&["BHA", "AVL"]), &[12]).unwrap();
        assert_eq!(report.get("BHA", 12), Some(&None));
        assert_eq!(report.get("AVL", 12), Some(&None));
    }

    #[test]
    fn test_unknown_team_aborts() {
        let fixtures = vec![Fixture::new(Some(12), 1, 2)];
        let err = build_report(&two_teams(), &fixtures, &codes(&["BHA", "XXX"]), &[12]).unwrap_err();
        assert!(matches!(err, FplError::TeamCodeNotFound(ref code) if code == "XXX"));
    }

    #[test]
    fn test_opponent_missing_from_team_table_aborts() {
        let fixtures = vec![Fixture::new(Some(12), 1, 42)];
        let err = build_report(&two_teams(), &fixtures, &codes(&["BHA"]), &[12]).unwrap_err();
        assert!(matches!(err, FplError::TeamIdNotFound(42)));
    }

    #[test]
    fn test_rounds_outside_target_and_unscheduled_are_ignored() {
        let fixtures = vec![
            Fixture::new(None, 1, 2),
            Fixture::new(Some(11), 1, 2),
            Fixture::new(Some(13), 2, 1),
        ];
        assert_eq!(filter_fixtures(&fixtures, &[12, 13]).len(), 1);

        let report = build_report(&two_teams(), &fixtures, &codes(&["BHA"]), &[12, 13]).unwrap();
        assert_eq!(report.get("BHA", 12), Some(&None));
        assert_eq!(report.get("BHA", 13), Some(&Some("AVL".to_string())));
        assert_eq!(report.get("BHA", 11), None);
    }

    #[test]
    fn test_first_fixture_wins_on_duplicates() {
        let teams = TeamTable::new(vec![Team::new(1, "BHA"), Team::new(2, "AVL"), Team::new(3, "CHE")]);
        let fixtures = vec![Fixture::new(Some(12), 3, 1), Fixture::new(Some(12), 1, 2)];
        let targeted = filter_fixtures(&fixtures, &[12]);

        let found = find_fixture(&targeted, 12, 1).unwrap();
        assert_eq!(opponent_id(found, 1), 3);

        let report = build_report(&teams, &fixtures, &codes(&["BHA"]), &[12]).unwrap();
        assert_eq!(report.get("BHA", 12), Some(&Some("CHE".to_string())));
    }

    #[test]
    fn test_order_follows_inputs_not_fixtures() {
        let teams = TeamTable::new(vec![
            Team::new(1, "BHA"),
            Team::new(2, "AVL"),
            Team::new(3, "CHE"),
            Team::new(4, "NEW"),
        ]);
        let fixtures = vec![
            Fixture::new(Some(14), 4, 1),
            Fixture::new(Some(13), 3, 4),
            Fixture::new(Some(12), 1, 2),
            Fixture::new(Some(14), 2, 3),
            Fixture::new(Some(12), 3, 4),
            Fixture::new(Some(13), 2, 1),
        ];
        let report =
            build_report(&teams, &fixtures, &codes(&["NEW", "BHA", "CHE"]), &[14, 12, 13]).unwrap();

        assert_eq!(report.teams(), &codes(&["NEW", "BHA", "CHE"])[..]);
        assert_eq!(report.column_labels(), vec!["GW14", "GW12", "GW13"]);
        let rows: Vec<(&str, Vec<Option<&str>>)> = report
            .rows()
            .map(|(team, cells)| (team, cells.iter().map(|c| c.as_deref()).collect()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("NEW", vec![Some("BHA"), Some("CHE"), Some("CHE")]),
                ("BHA", vec![Some("NEW"), Some("AVL"), Some("AVL")]),
                ("CHE", vec![Some("AVL"), Some("NEW"), Some("NEW")]),
            ]
        );
    }

    #[test]
    fn test_opponent_code_resolves_back_to_opponent_id() {
        let teams = two_teams();
        let fixtures = vec![Fixture::new(Some(12), 2, 1)];
        let report = build_report(&teams, &fixtures, &codes(&["BHA", "AVL"]), &[12]).unwrap();
        for (team, cells) in report.rows() {
            let team_id = teams.team_id(team).unwrap();
            let opp_code = cells[0].as_deref().unwrap();
            assert_eq!(teams.team_id(opp_code).unwrap(), opponent_id(&fixtures[0], team_id));
        }
    }

    #[test]
    fn test_render_console() {
        let teams = two_teams();
        let fixtures = vec![Fixture::new(Some(12), 1, 2)];
        let report = build_report(&teams, &fixtures, &codes(&["BHA", "AVL"]), &[12, 13]).unwrap();

        let expected = "\n=== Opponents for BHA, AVL in GW12-13 ===\n     GW12  GW13\nBHA   AVL  None\nAVL   BHA  None\n";
        assert_eq!(report.render_console(), expected);
        assert_eq!(report.render_console(), report.clone().render_console());
    }

    #[test]
    fn test_header_round_summaries() {
        let teams = two_teams();
        let team_codes = codes(&["BHA"]);
        let header = |rounds: &[u32]| build_report(&teams, &[], &team_codes, rounds).unwrap().header();

        assert_eq!(header(&[12, 13, 14]), "=== Opponents for BHA in GW12-14 ===");
        assert_eq!(header(&[12]), "=== Opponents for BHA in GW12 ===");
        assert_eq!(header(&[12, 14]), "=== Opponents for BHA in GW12, GW14 ===");
        assert_eq!(header(&[14, 13]), "=== Opponents for BHA in GW14, GW13 ===");
        assert_eq!(header(&[]), "=== Opponents for BHA in no gameweeks ===");
        assert_eq!(header(&[u32::MAX, 1]), "=== Opponents for BHA in GW4294967295, GW1 ===");
        assert_eq!(header(&[u32::MAX - 1, u32::MAX]), "=== Opponents for BHA in GW4294967294-4294967295 ===");
    }
}
