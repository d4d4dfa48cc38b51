//! Branch-and-bound backtracking over control visits.
//!
//! # Algorithm
//!
//! Depth-first enumeration of simple paths from the origin through any
//! subset of unvisited controls. At every node the search first checks
//! whether returning to the origin from here beats the best trip so far,
//! then stops expanding once the clock is past the latest closing time, and
//! otherwise tries each unvisited control reachable by a direct edge.
//!
//! A candidate branch is skipped when its optimistic bound (current score,
//! plus the points for the candidate, plus every other unvisited control,
//! minus the penalty already accrued on arrival) cannot exceed the best net
//! score. Arrival is used instead of the post-waiting visit time, which keeps
//! the bound loose but never cuts off an improving trip.
//!
//! # Complexity
//!
//! Exponential in the number of controls in the worst case; each node costs
//! O(n · d) for n controls and origin degree d.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::{PenaltyModel, SearchConfig};
use crate::graph::{Graph, VertexId};
use crate::models::{Control, Course, Solution, Visit};

/// How often (in nodes) the wall-clock budget is sampled.
const CLOCK_CHECK_INTERVAL: u64 = 1024;

/// Counters collected during a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    /// Search nodes expanded (recursive calls that passed the budget check).
    pub nodes: u64,

    /// Candidate branches skipped by the score bound.
    pub pruned: u64,

    /// Number of times the best trip was replaced.
    pub improvements: usize,

    /// Net score of each improvement, in the order found.
    pub score_history: Vec<i64>,

    /// Whether the node or time budget ran out before the search finished.
    pub budget_exhausted: bool,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Wall-clock duration of the search.
    pub elapsed: Duration,
}

impl SearchStats {
    /// Returns `true` if the whole search space was explored.
    pub fn is_complete(&self) -> bool {
        !self.budget_exhausted && !self.cancelled
    }
}

/// Result of a branch-and-bound run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best trip found, or the all-zero solution if none beats staying home.
    pub solution: Solution,

    /// Search counters.
    pub stats: SearchStats,
}

/// Executes the branch-and-bound search.
///
/// # Examples
///
/// ```
/// use u_orienteering::graph::Graph;
/// use u_orienteering::models::{Control, Course, TimeWindow};
/// use u_orienteering::search::{BranchAndBound, SearchConfig};
///
/// let mut g: Graph<String, f64> = Graph::new();
/// let start = g.insert_vertex("start".to_string());
/// let a = g.insert_vertex("A".to_string());
/// g.insert_edge(start, a, 5.0).unwrap();
/// g.insert_edge(a, start, 5.0).unwrap();
///
/// let course = Course::new(20.0, 1.0)
///     .unwrap()
///     .with_control(Control::new("A", 10, TimeWindow::new(0.0, 100.0).unwrap()));
///
/// let result = BranchAndBound::run(&g, &course, start, &SearchConfig::default());
/// assert_eq!(result.solution.total_score(), 10);
/// assert_eq!(result.solution.total_time(), 10.0);
/// assert!(result.stats.is_complete());
/// ```
pub struct BranchAndBound;

impl BranchAndBound {
    /// Runs the search from `start`, which is both origin and finish.
    pub fn run<V: AsRef<str>>(
        graph: &Graph<V, f64>,
        course: &Course,
        start: VertexId,
        config: &SearchConfig,
    ) -> SearchResult {
        Self::run_with_cancel(graph, course, start, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// When cancelled or out of budget, the best trip found so far is returned.
    #[tracing::instrument(
        level = "debug",
        name = "branch_and_bound",
        skip_all,
        fields(controls = course.len())
    )]
    pub fn run_with_cancel<V: AsRef<str>>(
        graph: &Graph<V, f64>,
        course: &Course,
        start: VertexId,
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SearchResult {
        let started = Instant::now();

        let origin = match graph.vertex(start) {
            Ok(payload) => payload.as_ref().to_owned(),
            Err(err) => {
                tracing::warn!(%err, "origin is not part of the graph; nothing to search");
                return SearchResult {
                    solution: Solution::default(),
                    stats: SearchStats {
                        elapsed: started.elapsed(),
                        ..SearchStats::default()
                    },
                };
            }
        };

        let (slots, slot_points) = code_slots(course.controls());
        let mut search = Search {
            graph,
            controls: course.controls(),
            targets: resolve_targets(graph, course.controls()),
            start,
            origin,
            penalty: course.penalty_model(),
            latest_close: course.latest_close(),
            config,
            cancel: cancel.as_deref(),
            started,
            visited: vec![false; slot_points.len()],
            slots,
            slot_points,
            remaining_points: course.total_points(),
            path: Vec::with_capacity(course.len()),
            best: Solution::default(),
            stats: SearchStats::default(),
            halted: false,
        };

        search.explore(start, 0.0, 0);

        let Search { best, mut stats, .. } = search;
        stats.elapsed = started.elapsed();

        if stats.budget_exhausted {
            tracing::warn!(
                nodes = stats.nodes,
                "search budget exhausted; returning best trip so far"
            );
        }
        tracing::info!(
            nodes = stats.nodes,
            pruned = stats.pruned,
            improvements = stats.improvements,
            score = best.total_score(),
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "branch-and-bound search finished"
        );

        SearchResult {
            solution: best,
            stats,
        }
    }
}

/// Finds the best trip with the default configuration.
///
/// Always returns a solution; it is the all-zero record when no round trip
/// scores above zero.
pub fn solve<V: AsRef<str>>(graph: &Graph<V, f64>, course: &Course, start: VertexId) -> Solution {
    BranchAndBound::run(graph, course, start, &SearchConfig::default()).solution
}

/// Maps each control to the vertex carrying its code.
fn resolve_targets<V: AsRef<str>>(
    graph: &Graph<V, f64>,
    controls: &[Control],
) -> Vec<Option<VertexId>> {
    let mut by_code: HashMap<&str, VertexId> = HashMap::with_capacity(graph.num_vertices());
    for v in graph.vertices() {
        if let Ok(payload) = graph.vertex(v) {
            by_code.entry(payload.as_ref()).or_insert(v);
        }
    }

    controls
        .iter()
        .map(|control| {
            let target = by_code.get(control.code()).copied();
            if target.is_none() {
                tracing::warn!(
                    code = control.code(),
                    "control has no matching vertex and will not be visited"
                );
            }
            target
        })
        .collect()
}

/// Groups controls by code.
///
/// Returns the slot of each control and the total points listed under each
/// slot. A code listed more than once shares one slot, so it is visited and
/// scored at most once.
fn code_slots(controls: &[Control]) -> (Vec<usize>, Vec<i64>) {
    let mut by_code: HashMap<&str, usize> = HashMap::with_capacity(controls.len());
    let mut slot_points = Vec::new();
    let slots = controls
        .iter()
        .map(|control| {
            let slot = *by_code.entry(control.code()).or_insert_with(|| {
                slot_points.push(0);
                slot_points.len() - 1
            });
            slot_points[slot] += i64::from(control.points());
            slot
        })
        .collect();
    (slots, slot_points)
}

/// Mutable state of one search, owned by the active call stack.
struct Search<'a, V> {
    graph: &'a Graph<V, f64>,
    controls: &'a [Control],
    targets: Vec<Option<VertexId>>,
    start: VertexId,
    origin: String,
    penalty: PenaltyModel,
    latest_close: f64,
    config: &'a SearchConfig,
    cancel: Option<&'a AtomicBool>,
    started: Instant,
    /// Visited flag per code slot.
    visited: Vec<bool>,
    /// Code slot of each control.
    slots: Vec<usize>,
    /// Points listed under each code slot.
    slot_points: Vec<i64>,
    /// Sum of points of the unvisited controls.
    remaining_points: i64,
    path: Vec<Visit>,
    best: Solution,
    stats: SearchStats,
    halted: bool,
}

impl<V> Search<'_, V> {
    fn explore(&mut self, at: VertexId, time: f64, score: i64) {
        if self.should_halt() {
            return;
        }
        self.stats.nodes += 1;

        self.try_finish(at, time, score);

        if time > self.latest_close {
            return;
        }

        let graph = self.graph;
        let controls = self.controls;
        for (index, control) in controls.iter().enumerate() {
            let slot = self.slots[index];
            if self.visited[slot] {
                continue;
            }
            let Some(target) = self.targets[index] else {
                continue;
            };
            let Ok(incidences) = graph.incidences(at) else {
                return;
            };

            for inc in incidences {
                if inc.opposite != target || !self.config.traversal.allows(inc.forward) {
                    continue;
                }
                if self.halted {
                    return;
                }

                let arrival = time + *inc.payload;
                let visit_time = control.window().visit_time(arrival);
                let credited = control.points_at(visit_time);
                let points = i64::from(credited);

                if self.config.pruning {
                    let others = self.remaining_points - self.slot_points[slot];
                    let bound = score + points + others - self.penalty.penalty(arrival);
                    if bound <= self.best.total_score() {
                        self.stats.pruned += 1;
                        continue;
                    }
                }

                self.path
                    .push(Visit::new(control.code(), index + 1, visit_time, credited));
                self.visited[slot] = true;
                self.remaining_points -= self.slot_points[slot];

                self.explore(target, visit_time, score + points);

                self.remaining_points += self.slot_points[slot];
                self.visited[slot] = false;
                self.path.pop();
            }
        }
    }

    /// Records the trip that returns to the origin from `at`, if it improves.
    fn try_finish(&mut self, at: VertexId, time: f64, score: i64) {
        let graph = self.graph;
        let Ok(incidences) = graph.incidences(at) else {
            return;
        };

        for inc in incidences {
            if inc.opposite != self.start || !self.config.traversal.allows(inc.forward) {
                continue;
            }

            let return_time = time + *inc.payload;
            let penalty = self.penalty.penalty(return_time);
            let net = score - penalty;
            if net > self.best.total_score() {
                let mut visits = Vec::with_capacity(self.path.len() + 1);
                visits.extend_from_slice(&self.path);
                visits.push(Visit::finish(self.origin.as_str(), return_time));
                self.best = Solution::new(visits, return_time, score, penalty);
                self.stats.improvements += 1;
                self.stats.score_history.push(net);
                tracing::debug!(
                    score = net,
                    raw = score,
                    penalty,
                    time = return_time,
                    controls = self.path.len(),
                    "improved best trip"
                );
            }
        }
    }

    fn should_halt(&mut self) -> bool {
        if self.halted {
            return true;
        }
        if let Some(cancel) = self.cancel {
            if cancel.load(Ordering::Relaxed) {
                self.stats.cancelled = true;
                self.halted = true;
                return true;
            }
        }
        if self.config.max_nodes > 0 && self.stats.nodes >= self.config.max_nodes {
            self.stats.budget_exhausted = true;
            self.halted = true;
            return true;
        }
        if let Some(budget) = self.config.time_budget {
            if self.stats.nodes % CLOCK_CHECK_INTERVAL == 0 && self.started.elapsed() >= budget {
                self.stats.budget_exhausted = true;
                self.halted = true;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeWindow;
    use crate::search::EdgeTraversal;

    struct Fixture {
        graph: Graph<String, f64>,
        start: VertexId,
        ids: HashMap<String, VertexId>,
    }

    impl Fixture {
        fn new(codes: &[&str]) -> Self {
            let mut graph = Graph::new();
            let start = graph.insert_vertex("start".to_string());
            let mut ids = HashMap::new();
            ids.insert("start".to_string(), start);
            for code in codes {
                ids.insert(code.to_string(), graph.insert_vertex(code.to_string()));
            }
            Self { graph, start, ids }
        }

        /// Adds a forward and a reverse edge, as the map loader does.
        fn connect(&mut self, from: &str, to: &str, forward: f64, reverse: f64) {
            let (a, b) = (self.ids[from], self.ids[to]);
            self.graph.insert_edge(a, b, forward).expect("forward");
            self.graph.insert_edge(b, a, reverse).expect("reverse");
        }

        fn run(&self, course: &Course, config: &SearchConfig) -> SearchResult {
            BranchAndBound::run(&self.graph, course, self.start, config)
        }
    }

    fn control(code: &str, points: u32, open: f64, close: f64) -> Control {
        Control::new(code, points, TimeWindow::new(open, close).expect("valid"))
    }

    fn course(limit: f64, rate: f64, controls: Vec<Control>) -> Course {
        let mut course = Course::new(limit, rate).expect("valid");
        for c in controls {
            course.push_control(c);
        }
        course
    }

    #[test]
    fn test_empty_course_yields_zero_solution() {
        let fx = Fixture::new(&[]);
        let c = course(60.0, 1.0, vec![]);
        let sol = solve(&fx.graph, &c, fx.start);
        assert_eq!(sol, Solution::default());
    }

    #[test]
    fn test_single_control_round_trip() {
        let mut fx = Fixture::new(&["A"]);
        fx.connect("start", "A", 5.0, 5.0);
        let c = course(20.0, 1.0, vec![control("A", 10, 0.0, 100.0)]);

        let sol = solve(&fx.graph, &c, fx.start);
        assert_eq!(
            sol.visits(),
            &[Visit::new("A", 1, 5.0, 10), Visit::finish("start", 10.0)]
        );
        assert_eq!(sol.total_time(), 10.0);
        assert_eq!(sol.total_score(), 10);
        assert_eq!(sol.raw_score(), 10);
        assert_eq!(sol.penalty(), 0);
    }

    #[test]
    fn test_waits_for_opening() {
        let mut fx = Fixture::new(&["A"]);
        fx.connect("start", "A", 3.0, 3.0);
        let c = course(60.0, 1.0, vec![control("A", 10, 5.0, 10.0)]);

        let sol = solve(&fx.graph, &c, fx.start);
        assert_eq!(sol.visits()[0], Visit::new("A", 1, 5.0, 10));
        assert_eq!(sol.total_time(), 8.0);
    }

    #[test]
    fn test_late_visit_scores_nothing() {
        let mut fx = Fixture::new(&["A", "B"]);
        let (s, a, b) = (fx.ids["start"], fx.ids["A"], fx.ids["B"]);
        fx.graph.insert_edge(s, a, 11.0).expect("start-A");
        fx.graph.insert_edge(a, b, 1.0).expect("A-B");
        fx.graph.insert_edge(b, s, 1.0).expect("B-start");
        let c = course(
            100.0,
            1.0,
            vec![control("A", 5, 0.0, 10.0), control("B", 10, 0.0, 100.0)],
        );

        let config = SearchConfig::default().with_traversal(EdgeTraversal::Forward);
        let sol = fx.run(&c, &config).solution;
        assert_eq!(sol.control_codes(), vec!["A", "B"]);
        assert_eq!(sol.visits()[0], Visit::new("A", 1, 11.0, 0));
        assert_eq!(sol.visits()[1], Visit::new("B", 2, 12.0, 10));
        assert_eq!(sol.total_time(), 13.0);
        assert_eq!(sol.total_score(), 10);
    }

    fn two_control_fixture() -> Fixture {
        let mut fx = Fixture::new(&["A", "B"]);
        fx.connect("start", "A", 10.0, 10.0);
        fx.connect("A", "B", 10.0, 10.0);
        fx.connect("B", "start", 10.0, 10.0);
        fx
    }

    #[test]
    fn test_accepts_penalty_when_worth_it() {
        let fx = two_control_fixture();
        let c = course(
            27.0,
            1.0,
            vec![control("A", 20, 0.0, 100.0), control("B", 15, 0.0, 100.0)],
        );

        let sol = solve(&fx.graph, &c, fx.start);
        assert_eq!(sol.control_codes(), vec!["A", "B"]);
        assert_eq!(sol.total_time(), 30.0);
        assert_eq!(sol.raw_score(), 35);
        assert_eq!(sol.penalty(), 3);
        assert_eq!(sol.total_score(), 32);
    }

    #[test]
    fn test_skips_control_when_penalty_too_high() {
        let fx = two_control_fixture();
        let c = course(
            27.0,
            10.0,
            vec![control("A", 20, 0.0, 100.0), control("B", 15, 0.0, 100.0)],
        );

        let sol = solve(&fx.graph, &c, fx.start);
        assert_eq!(sol.control_codes(), vec!["A"]);
        assert_eq!(sol.penalty(), 0);
        assert_eq!(sol.total_score(), 20);
    }

    #[test]
    fn test_traversal_modes() {
        let mut fx = Fixture::new(&["A"]);
        fx.connect("start", "A", 5.0, 50.0);
        let c = course(20.0, 1.0, vec![control("A", 10, 0.0, 100.0)]);

        let undirected = fx.run(&c, &SearchConfig::default()).solution;
        assert_eq!(undirected.total_time(), 10.0);
        assert_eq!(undirected.total_score(), 10);

        let forward = fx
            .run(
                &c,
                &SearchConfig::default().with_traversal(EdgeTraversal::Forward),
            )
            .solution;
        // 5 out, 50 back: 35 minutes late outweighs the 10 points.
        assert!(forward.is_empty());
        assert_eq!(forward.total_score(), 0);
    }

    #[test]
    fn test_parallel_edges_are_separate_branches() {
        let mut fx = Fixture::new(&["A"]);
        let (s, a) = (fx.ids["start"], fx.ids["A"]);
        fx.graph.insert_edge(s, a, 9.0).expect("slow");
        fx.graph.insert_edge(s, a, 4.0).expect("fast");
        fx.graph.insert_edge(a, s, 4.0).expect("back");
        let c = course(10.0, 1.0, vec![control("A", 10, 0.0, 100.0)]);

        let config = SearchConfig::default().with_traversal(EdgeTraversal::Forward);
        let sol = fx.run(&c, &config).solution;
        assert_eq!(sol.visits()[0].time, 4.0);
        assert_eq!(sol.total_time(), 8.0);
        assert_eq!(sol.total_score(), 10);
    }

    #[test]
    fn test_pruning_does_not_change_result() {
        let mut fx = Fixture::new(&["A", "B", "C", "D"]);
        fx.connect("start", "A", 4.0, 5.0);
        fx.connect("start", "B", 7.0, 6.0);
        fx.connect("A", "B", 3.0, 3.0);
        fx.connect("A", "C", 6.0, 8.0);
        fx.connect("B", "D", 2.0, 2.0);
        fx.connect("C", "D", 5.0, 4.0);
        fx.connect("D", "start", 9.0, 9.0);
        let c = course(
            25.0,
            2.0,
            vec![
                control("A", 10, 0.0, 30.0),
                control("B", 20, 10.0, 40.0),
                control("C", 30, 0.0, 20.0),
                control("D", 5, 0.0, 50.0),
            ],
        );

        let pruned = fx.run(&c, &SearchConfig::default());
        let full = fx.run(&c, &SearchConfig::default().with_pruning(false));
        assert_eq!(pruned.solution, full.solution);
        assert!(pruned.stats.pruned > 0);
        assert_eq!(full.stats.pruned, 0);
        assert!(pruned.stats.nodes < full.stats.nodes);
    }

    #[test]
    fn test_deterministic() {
        let fx = two_control_fixture();
        let c = course(
            27.0,
            1.0,
            vec![control("A", 20, 0.0, 100.0), control("B", 15, 0.0, 100.0)],
        );
        let first = fx.run(&c, &SearchConfig::default());
        let second = fx.run(&c, &SearchConfig::default());
        assert_eq!(first.solution, second.solution);
        assert_eq!(first.stats.nodes, second.stats.nodes);
        assert_eq!(first.stats.score_history, second.stats.score_history);
    }

    #[test]
    fn test_score_history_increases() {
        let fx = two_control_fixture();
        let c = course(
            27.0,
            1.0,
            vec![control("A", 20, 0.0, 100.0), control("B", 15, 0.0, 100.0)],
        );
        let result = fx.run(&c, &SearchConfig::default());
        assert_eq!(result.stats.score_history, vec![20, 32]);
        assert_eq!(result.stats.improvements, 2);
    }

    #[test]
    fn test_no_expansion_after_latest_close() {
        let mut fx = Fixture::new(&["A", "B"]);
        let (s, a, b) = (fx.ids["start"], fx.ids["A"], fx.ids["B"]);
        fx.graph.insert_edge(s, a, 10.0).expect("start-A");
        fx.graph.insert_edge(a, b, 1.0).expect("A-B");
        fx.graph.insert_edge(b, s, 1.0).expect("B-start");
        let c = course(
            100.0,
            1.0,
            vec![control("A", 1, 0.0, 5.0), control("B", 5, 0.0, 5.0)],
        );

        let config = SearchConfig::default().with_traversal(EdgeTraversal::Forward);
        let result = fx.run(&c, &config);
        // start, then A at time 10 > 5: B is never tried.
        assert_eq!(result.stats.nodes, 2);
        assert!(result.solution.is_empty());
    }

    #[test]
    fn test_unresolved_control_is_ignored() {
        let mut fx = Fixture::new(&["A"]);
        fx.connect("start", "A", 5.0, 5.0);
        let c = course(
            20.0,
            1.0,
            vec![control("Z", 50, 0.0, 100.0), control("A", 10, 0.0, 100.0)],
        );

        let sol = solve(&fx.graph, &c, fx.start);
        assert_eq!(sol.control_codes(), vec!["A"]);
        assert_eq!(sol.visits()[0].id, 2);
        assert_eq!(sol.total_score(), 10);
    }

    #[test]
    fn test_repeated_code_scores_once() {
        let mut fx = Fixture::new(&["X", "B"]);
        fx.connect("start", "X", 5.0, 5.0);
        fx.connect("X", "B", 1.0, 1.0);
        fx.connect("B", "start", 1.0, 1.0);
        let c = course(
            100.0,
            1.0,
            vec![
                control("X", 10, 0.0, 100.0),
                control("B", 1, 0.0, 100.0),
                control("X", 10, 0.0, 100.0),
            ],
        );

        let sol = solve(&fx.graph, &c, fx.start);
        assert_eq!(sol.control_codes(), vec!["X", "B"]);
        assert_eq!(sol.raw_score(), 11);
        assert_eq!(sol.total_time(), 7.0);
    }

    #[test]
    fn test_bound_charges_penalty_at_arrival() {
        let mut fx = Fixture::new(&["A", "B"]);
        fx.connect("start", "A", 5.0, 5.0);
        fx.connect("start", "B", 10.0, 10.0);
        let c = course(
            20.0,
            1.0,
            vec![control("A", 10, 0.0, 100.0), control("B", 5, 50.0, 100.0)],
        );

        let result = fx.run(&c, &SearchConfig::default());
        // B is reached at 10 but visited at 50; only the arrival penalty counts.
        assert_eq!(result.stats.pruned, 0);
        assert_eq!(result.stats.nodes, 5);
        assert_eq!(result.solution.control_codes(), vec!["A"]);
        assert_eq!(result.solution.total_score(), 10);
    }

    #[test]
    fn test_node_budget() {
        let fx = two_control_fixture();
        let c = course(
            27.0,
            1.0,
            vec![control("A", 20, 0.0, 100.0), control("B", 15, 0.0, 100.0)],
        );
        let result = fx.run(&c, &SearchConfig::default().with_max_nodes(1));
        assert!(result.stats.budget_exhausted);
        assert!(!result.stats.is_complete());
        assert_eq!(result.stats.nodes, 1);
        assert!(result.solution.is_empty());
    }

    #[test]
    fn test_zero_time_budget() {
        let fx = two_control_fixture();
        let c = course(27.0, 1.0, vec![control("A", 20, 0.0, 100.0)]);
        let config = SearchConfig::default().with_time_budget(Duration::ZERO);
        let result = fx.run(&c, &config);
        assert!(result.stats.budget_exhausted);
        assert_eq!(result.stats.nodes, 0);
    }

    #[test]
    fn test_cancelled_before_start() {
        let fx = two_control_fixture();
        let c = course(27.0, 1.0, vec![control("A", 20, 0.0, 100.0)]);
        let cancel = Arc::new(AtomicBool::new(true));
        let result = BranchAndBound::run_with_cancel(
            &fx.graph,
            &c,
            fx.start,
            &SearchConfig::default(),
            Some(cancel),
        );
        assert!(result.stats.cancelled);
        assert_eq!(result.stats.nodes, 0);
        assert!(result.solution.is_empty());
    }

    #[test]
    fn test_foreign_origin() {
        let fx = two_control_fixture();
        let other = Fixture::new(&[]);
        let c = course(27.0, 1.0, vec![control("A", 20, 0.0, 100.0)]);
        let result = BranchAndBound::run(&fx.graph, &c, other.start, &SearchConfig::default());
        assert!(result.solution.is_empty());
        assert_eq!(result.stats.nodes, 0);
    }
}
