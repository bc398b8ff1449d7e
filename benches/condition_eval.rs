//! Condition evaluation benchmarks.
//!
//! Measures a realistic shoot condition against a populated board, both when
//! every predicate passes and when every predicate fails.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tank_rules::conditional::{Condition, MetaArgs, MetaData, MetaValue, Predicate};
use tank_rules::core::attributes::keys;
use tank_rules::core::{GameConfig, Player, PlayerRef, Position, State, Unit};

fn shoot_condition() -> Condition {
    Condition::new([
        Predicate::check(
            |state: &State, player: &PlayerRef| state.tank_int(player, keys::ACTION_POINTS, 0) >= 1,
            "not enough action points",
        ),
        Predicate::with_meta(|state: &State, player: &PlayerRef, meta: &[MetaValue]| {
            let target = MetaArgs::new(meta).position(0).map_err(|e| e.to_string())?;
            let range = state.tank_int(player, keys::RANGE, 0);
            match state.tank_position(player) {
                Some(from) if i64::from(from.distance_to(target)) <= range => Ok(()),
                _ => Err(format!("target {target} is out of range")),
            }
        }),
        Predicate::check_with_meta(
            |state: &State, _: &PlayerRef, meta: &[MetaValue]| {
                MetaArgs::new(meta)
                    .position(0)
                    .is_ok_and(|target| state.board.is_occupied(target))
            },
            "nothing to shoot at",
        ),
    ])
}

fn populated_state() -> State {
    let mut state = State::new(&GameConfig::new().with_board_size(20, 20));
    for i in 0..20u32 {
        let name = format!("player-{i}");
        state.add_player(Player::new(name.as_str()));
        state
            .place_tank(
                Position::new(i, i),
                Unit::tank(name.as_str())
                    .with_attribute(keys::ACTION_POINTS, i64::from(i % 3))
                    .with_attribute(keys::RANGE, 3),
            )
            .expect("tank fits on the board");
    }
    state
}

fn bench_condition(c: &mut Criterion) {
    let condition = shoot_condition();
    let state = populated_state();

    let mut hit = MetaData::new();
    hit.push(Position::new(2, 2).into());
    let mut miss = MetaData::new();
    miss.push(Position::new(19, 0).into());

    let shooter = PlayerRef::new("player-1");
    c.bench_function("condition_all_pass", |b| {
        b.iter(|| condition.test(black_box(&state), black_box(&shooter), black_box(&hit)))
    });

    let idle = PlayerRef::new("player-0");
    c.bench_function("condition_all_fail", |b| {
        b.iter(|| condition.test(black_box(&state), black_box(&idle), black_box(&miss)))
    });
}

criterion_group!(benches, bench_condition);
criterion_main!(benches);
