// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine driving permutation search.

use std::collections::HashSet;

use grid_digit_algos::engine::{EngineBuilder, Predicate, PredicateResult, TerminalPredicate};
use grid_digit_algos::permutation::{PermutationContext, PlaceElementPredicate};
use grid_digit_algos::predicates::{FailPredicate, SuspendPredicate};
use grid_digit_algos::state::{Counters, Statistics};
use pretty_assertions::assert_eq;

type Ctx = PermutationContext<u8, Vec<Vec<u8>>>;

/// Records each complete permutation, then fails to ask for the next.
#[derive(Debug)]
struct Collect;

impl Predicate<Ctx> for Collect {
    fn try_pred(&mut self, ctx: &mut Ctx, _round: usize) -> PredicateResult {
        let values = ctx.values.clone();
        ctx.state.push(values);
        PredicateResult::Failure
    }
}

impl TerminalPredicate<Ctx> for Collect {}

/// Passes only permutations in descending order.
#[derive(Debug)]
struct Descending;

impl Predicate<Ctx> for Descending {
    fn try_pred(&mut self, ctx: &mut Ctx, _round: usize) -> PredicateResult {
        if ctx.values.windows(2).all(|w| w[0] > w[1]) {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }
}

#[test]
fn test_enumerates_every_permutation_once() {
    let mut ctx = Ctx::new(vec![1, 2, 3, 4], Vec::new());
    let engine = EngineBuilder::new()
        .add(Box::new(PlaceElementPredicate))
        .terminal(Box::new(Collect))
        .build();
    assert!(engine.search(&mut ctx).is_none());

    assert_eq!(ctx.state.len(), 24);
    let distinct: HashSet<_> = ctx.state.iter().cloned().collect();
    assert_eq!(distinct.len(), 24);
    for perm in &ctx.state {
        let mut sorted = perm.clone();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4]);
    }
    assert_eq!(ctx.values, vec![1, 2, 3, 4]);
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_suspend_keeps_state() {
    let mut ctx = Ctx::new(vec![1, 2, 3, 4], Vec::new());
    let engine = EngineBuilder::new()
        .add(Box::new(PlaceElementPredicate))
        .add(Box::new(Descending))
        .terminal(Box::new(SuspendPredicate))
        .build();
    let engine = engine.search(&mut ctx);
    assert!(engine.is_some());
    assert_eq!(ctx.values, vec![4, 3, 2, 1]);
    assert!(!ctx.trail.is_empty());

    ctx.trail.rewind_to(0, &mut ctx.values);
    assert_eq!(ctx.values, vec![1, 2, 3, 4]);
}

#[test]
fn test_counting_predicate_counts_leaves() {
    let mut ctx = Ctx::new(vec![0, 1, 2, 3, 4], Vec::new());
    let engine = EngineBuilder::new()
        .add(Box::new(PlaceElementPredicate))
        .add(Statistics::counting_predicate(Counters::PermutationsVisited))
        .add(Box::new(Descending))
        .add(Statistics::counting_predicate(Counters::PrefixesSearched))
        .terminal(Box::new(FailPredicate))
        .build();
    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.statistics.get(Counters::PermutationsVisited), 120);
    assert_eq!(ctx.statistics.get(Counters::PrefixesSearched), 1);
}

#[test]
fn test_engine_can_be_rerun() {
    let engine = EngineBuilder::new()
        .add(Box::new(PlaceElementPredicate))
        .add(Box::new(Descending))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let mut first = Ctx::new(vec![3, 1, 2], Vec::new());
    let engine = engine.search(&mut first).expect("a descending arrangement exists");
    assert_eq!(first.values, vec![3, 2, 1]);

    let mut second = Ctx::new(vec![1, 1], Vec::new());
    assert!(engine.search(&mut second).is_none());
    assert_eq!(second.values, vec![1, 1]);
}

/// Accepts every state without offering alternatives.
#[derive(Debug)]
struct PassThrough;

impl Predicate<Ctx> for PassThrough {
    fn try_pred(&mut self, _ctx: &mut Ctx, _round: usize) -> PredicateResult {
        PredicateResult::Success
    }
}

#[test]
fn test_failure_backtracks_through_plain_successes() {
    let mut ctx = Ctx::new(vec![1, 2, 3, 4, 5, 6], Vec::new());
    let engine = EngineBuilder::new()
        .add(Box::new(PassThrough))
        .add(Box::new(PlaceElementPredicate))
        .add(Box::new(PassThrough))
        .add(Box::new(PassThrough))
        .terminal(Box::new(Collect))
        .build();
    assert!(engine.search(&mut ctx).is_none());
    assert_eq!(ctx.state.len(), 720);
    assert_eq!(ctx.values, vec![1, 2, 3, 4, 5, 6]);
}
