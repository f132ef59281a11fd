extern crate ioav_bridge;

#[cfg(target_os = "macos")]
fn main() -> ioav_bridge::Result<()> {
    use std::{thread, time::Duration};

    use ioav_bridge::AVService;

    const DDC_CHIP: u32 = 0x37;
    const DDC_DATA: u32 = 0x51;
    const VCP_BRIGHTNESS: u8 = 0x10;

    let service = AVService::new()?;

    // Get VCP Feature: length|0x80, opcode, vcp code, checksum over the
    // destination address (0x6e) and everything before it.
    let mut request = [0x82, 0x01, VCP_BRIGHTNESS, 0];
    request[3] = request[..3]
        .iter()
        .fold(0x6e ^ DDC_DATA as u8, |acc, b| acc ^ b);
    service.write_i2c(DDC_CHIP, DDC_DATA, &request)?;

    thread::sleep(Duration::from_millis(50));

    let mut reply = [0u8; 11];
    service.read_i2c(DDC_CHIP, DDC_DATA, &mut reply)?;

    for (i, b) in reply.iter().enumerate() {
        if i != 0 {
            print!(" ");
        }
        print!("{:0>2x}", b);
    }
    println!();
    if reply[2] == 0x02 && reply[4] == VCP_BRIGHTNESS {
        let max = u16::from_be_bytes([reply[6], reply[7]]);
        let current = u16::from_be_bytes([reply[8], reply[9]]);
        println!("brightness {}/{}", current, max);
    }
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn main() {
    eprintln!("IOAVService is only available on macOS.");
}
