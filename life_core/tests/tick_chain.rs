use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use life_core::patterns::{BLINKER, GLIDER};
use life_core::{Config, LocalTicker, RunState, SimulationController};
use tokio::task::LocalSet;
use tokio::time::sleep;

fn ticker(size: usize) -> LocalTicker {
    let config = Config { grid_size: size, tick_period: Duration::from_millis(150), ..Config::default() };
    let mut controller = SimulationController::new(config).unwrap();
    controller.apply_pattern(&BLINKER);
    LocalTicker::new(Rc::new(RefCell::new(controller)))
}

fn generation(ticker: &LocalTicker) -> u64 {
    ticker.controller().borrow().generation()
}

#[tokio::test(start_paused = true)]
async fn chain_ticks_every_period_until_paused() {
    LocalSet::new()
        .run_until(async {
            let ticker = ticker(10);
            assert_eq!(ticker.toggle_run(), RunState::Simulating);

            // First tick fires right away.
            sleep(Duration::from_millis(10)).await;
            assert_eq!(generation(&ticker), 1);

            // Then at 150ms and 300ms.
            sleep(Duration::from_millis(300)).await;
            assert_eq!(generation(&ticker), 3);

            assert_eq!(ticker.toggle_run(), RunState::AtRest);
            sleep(Duration::from_secs(1)).await;
            assert_eq!(generation(&ticker), 3);
            assert!(!ticker.chain_alive());
            assert_eq!(ticker.join().await, 3);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn quick_restart_reuses_the_pending_chain() {
    LocalSet::new()
        .run_until(async {
            let ticker = ticker(10);
            ticker.toggle_run();
            sleep(Duration::from_millis(10)).await;
            ticker.toggle_run();
            sleep(Duration::from_millis(10)).await;
            ticker.toggle_run();

            // A second chain would have ticked immediately.
            sleep(Duration::from_millis(80)).await;
            assert_eq!(generation(&ticker), 1);

            sleep(Duration::from_millis(60)).await;
            assert_eq!(generation(&ticker), 2);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn observer_can_stop_the_run() {
    LocalSet::new()
        .run_until(async {
            let ticker = ticker(50);
            let seen = Rc::new(RefCell::new(Vec::new()));
            let log = Rc::clone(&seen);
            ticker.on_tick(move |ctl| {
                log.borrow_mut().push(ctl.population());
                if ctl.generation() >= 5 {
                    ctl.toggle_run();
                }
            });

            ticker.toggle_run();
            assert_eq!(ticker.join().await, 5);
            assert_eq!(*seen.borrow(), vec![3; 5]);
            assert_eq!(ticker.controller().borrow().run_state(), RunState::AtRest);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn edits_wait_for_pause() {
    LocalSet::new()
        .run_until(async {
            let ticker = ticker(50);
            ticker.toggle_run();
            sleep(Duration::from_millis(10)).await;

            let before = ticker.controller().borrow().grid().clone();
            ticker.controller().borrow_mut().apply_pattern(&GLIDER);
            assert_eq!(ticker.controller().borrow().grid(), &before);

            ticker.toggle_run();
            ticker.join().await;
            ticker.controller().borrow_mut().apply_pattern(&GLIDER);
            assert_eq!(ticker.controller().borrow().population(), 5);
        })
        .await;
}
