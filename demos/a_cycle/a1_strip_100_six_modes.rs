#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Timer};
use strip_cycler::{
    Result,
    cycler::{self, Cycler},
    led_strip::LedStrip,
    mode_switch::{ModeSwitch, PressedTo, mode_button_task},
    patterns::MODE_COUNT,
};
use {defmt_rtt as _, panic_probe as _};

static MODE_SWITCH: ModeSwitch = ModeSwitch::new(MODE_COUNT);

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // 100-pixel WS2812 strip on GPIO28, PIO0 + DMA channel 0.
    let led_strip = LedStrip::new(p.PIN_28, p.PIO0, p.DMA_CH0, spawner)?;

    // Blank the strip and give its power rail a moment before animating.
    led_strip.clear().await;
    Timer::after(Duration::from_secs(1)).await;

    // Mode button on GPIO16, wired so a press connects the pin to 3.3V.
    let button = Input::new(p.PIN_16, Pull::Down);
    spawner
        .spawn(mode_button_task(button, PressedTo::Voltage, &MODE_SWITCH))
        .map_err(strip_cycler::Error::TaskSpawn)?;

    let cycler = Cycler::new(&MODE_SWITCH);
    cycler::run(cycler, led_strip).await
}
