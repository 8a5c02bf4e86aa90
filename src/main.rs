#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

extern crate alloc;

use alloc::boxed::Box;
use core::future::pending;
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, StackResources};
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::timer::timg::TimerGroup;
use log::{error, info};
use pwm_pca9685::{Address, Pca9685};
use spider_motion::tasks::net_task::{command_server, join_wifi, stack_runner};
use spider_motion::tasks::sequencer_task::sequencer_task;
use spider_motion::tasks::servo_task::servo_task;
use spider_motion::tasks::{CMD_CHANNEL, FRAME_CHANNEL};

esp_bootloader_esp_idf::esp_app_desc!();

//PCA BOARDS: [sda, scl]
//BOARD 0 (actuators 0..16): I2C0 [21, 22]
//BOARD 1 (actuators 16..22): I2C1 [18, 19]

macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        STATIC_CELL.init_with(|| $val)
    }};
}

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    esp_println::logger::init_logger_from_env();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let p = esp_hal::init(config);

    esp_alloc::heap_allocator!(size: 32 * 1024);
    esp_alloc::heap_allocator!(#[unsafe(link_section = ".dram2_uninit")] size: 96 * 1024);

    let timer0 = TimerGroup::new(p.TIMG1);
    esp_hal_embassy::init(timer0.timer0);

    // take important peripherals
    let mut rng = esp_hal::rng::Rng::new(p.RNG);
    let timer1 = TimerGroup::new(p.TIMG0);
    let wifi_init = esp_wifi::init(timer1.timer0, rng, p.RADIO_CLK)
        .expect("Failed to initialize WIFI controller");
    let wifi_init = Box::leak(Box::new(wifi_init));
    let (mut wifi_controller, interfaces) =
        esp_wifi::wifi::new(wifi_init, p.WIFI).expect("Failed to initialize WIFI controller");

    let online = match join_wifi(&mut wifi_controller).await {
        Ok(()) => true,
        Err(e) => {
            error!("wifi unavailable ({e:?}), running without the command server");
            false
        }
    };

    let i2c0 = I2c::new(p.I2C0, I2cConfig::default())
        .expect("Fail creating i2c0")
        .with_sda(p.GPIO21)
        .with_scl(p.GPIO22)
        .into_async();
    let i2c1 = I2c::new(p.I2C1, I2cConfig::default())
        .expect("Fail creating i2c1")
        .with_sda(p.GPIO18)
        .with_scl(p.GPIO19)
        .into_async();
    let boards = [
        Pca9685::new(i2c0, Address::default()).expect("Fail creating pca board 0"),
        Pca9685::new(i2c1, Address::default()).expect("Fail creating pca board 1"),
    ];

    //Get the embassy net stack up and working.
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;
    let config = NetConfig::dhcpv4(Default::default());
    let device = interfaces.sta;
    let (stack, runner) = embassy_net::new(
        device,
        config,
        mk_static!(StackResources<3>, StackResources::new()),
        seed,
    );

    info!("Starting spider motion sequencer...");
    spawner
        .spawn(servo_task(boards, FRAME_CHANNEL.receiver()))
        .expect("Fail spawning servo task");
    spawner
        .spawn(sequencer_task(
            CMD_CHANNEL.receiver(),
            FRAME_CHANNEL.sender(),
        ))
        .expect("Fail spawning sequencer task");
    if online {
        spawner
            .spawn(stack_runner(runner))
            .expect("Fail spawning stack runner");
        spawner
            .spawn(command_server(stack, CMD_CHANNEL.sender()))
            .expect("Fail spawning command server");
    }

    loop {
        pending::<()>().await;
    }
}
