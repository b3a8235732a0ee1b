use core::cell::RefCell;
use cortex_m::interrupt::{free, Mutex};
use microbit::hal::timer::{Periodic, Timer};
use microbit::pac::{self, interrupt, TIMER0};
use minebit::config::TICK_PERIOD_US;
use minebit::Ticks;

static TICKS: Ticks = Ticks::new();
static TIMER: Mutex<RefCell<Option<Timer<TIMER0, Periodic>>>> = Mutex::new(RefCell::new(None));

/// Start TIMER0 firing once per game tick. The counters stay frozen until the game enables them.
pub(crate) fn init_ticks(board_timer: TIMER0) -> &'static Ticks {
    let mut timer = Timer::periodic(board_timer);
    timer.enable_interrupt();
    timer.start(TICK_PERIOD_US);

    free(move |cs| {
        *TIMER.borrow(cs).borrow_mut() = Some(timer);
        unsafe {
            pac::NVIC::unmask(pac::Interrupt::TIMER0);
        }
        pac::NVIC::unpend(pac::Interrupt::TIMER0);
    });

    &TICKS
}

#[interrupt]
fn TIMER0() {
    free(|cs| {
        if let Some(timer) = TIMER.borrow(cs).borrow().as_ref() {
            timer.reset_event();
        }
    });
    TICKS.on_interrupt();
}
