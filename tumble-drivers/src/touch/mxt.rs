//! Microchip maXTouch touch controller over I2C
//!
//! The controller exposes a 16-bit register space (little-endian address
//! prefix on every transfer). It starts with a 7-byte information block
//! followed by an object table; each object ("T5", "T9", ...) lives at an
//! address listed there and owns a contiguous range of report ids.
//!
//! Touch reports are queued by the controller and read one at a time from
//! the message processor object (T5). The CHG line is held low while the
//! queue is non-empty.
//!
//! ```ignore
//! let mut mxt = Mxt::new(i2c, chg, MXT_DEFAULT_ADDRESS);
//! let info = mxt.init()?;
//!
//! if mxt.is_sample_pending() {
//!     let sample = mxt.read_sample()?;
//! }
//! ```

use embedded_hal::digital::InputPin;
use embedded_hal::i2c::{I2c, SevenBitAddress};
use heapless::Vec;
use tumble_hal::{TouchSample, TouchSensor};

/// Factory I2C address
pub const MXT_DEFAULT_ADDRESS: u8 = 0x4A;

const INFO_BLOCK_LEN: usize = 7;
const OBJECT_ENTRY_LEN: usize = 6;
const MAX_OBJECTS: u8 = 64;

/// Report id plus the seven T9 payload bytes
const MESSAGE_LEN: usize = 8;
const MAX_WRITE_LEN: usize = 32;

/// Report id the controller returns when its queue is empty
pub const NO_MESSAGE: u8 = 0xFF;

const GEN_MESSAGEPROCESSOR_T5: u8 = 5;
const GEN_POWERCONFIG_T7: u8 = 7;
const TOUCH_MULTITOUCHSCREEN_T9: u8 = 9;

/// IDLEACQINT, ACTVACQINT (ms) and ACTV2IDLETO (200 ms units)
const POWER_CONFIG: [u8; 3] = [32, 16, 50];

/// maXTouch driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MxtError<E> {
    /// Bus error
    I2c(E),
    /// Information block is empty or implausible
    InvalidInfoBlock,
    /// A required object type is missing from the object table
    ObjectNotFound(u8),
    /// A message arrived that is not a touch report
    UnexpectedReport(u8),
    /// `read_sample` called before a successful `init`
    NotInitialized,
    /// Register write longer than the transfer buffer
    BufferOverflow,
}

/// Controller identification read from address 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InfoBlock {
    pub family_id: u8,
    pub variant_id: u8,
    pub version: u8,
    pub build: u8,
    pub matrix_x_size: u8,
    pub matrix_y_size: u8,
    pub object_count: u8,
}

impl InfoBlock {
    fn parse(raw: &[u8; INFO_BLOCK_LEN]) -> Self {
        Self {
            family_id: raw[0],
            variant_id: raw[1],
            version: raw[2],
            build: raw[3],
            matrix_x_size: raw[4],
            matrix_y_size: raw[5],
            object_count: raw[6],
        }
    }
}

/// One object table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ObjectEntry {
    kind: u8,
    start: u16,
    size: u16,
    instances: u16,
    reports_per_instance: u8,
}

impl ObjectEntry {
    fn parse(raw: &[u8; OBJECT_ENTRY_LEN]) -> Self {
        Self {
            kind: raw[0],
            start: u16::from_le_bytes([raw[1], raw[2]]),
            size: u16::from(raw[3]) + 1,
            instances: u16::from(raw[4]) + 1,
            reports_per_instance: raw[5],
        }
    }

    fn report_count(&self) -> u16 {
        self.instances * u16::from(self.reports_per_instance)
    }
}

/// Addresses and report ids the driver needs after `init`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ObjectMap {
    /// T5 start address
    pub message_processor: u16,
    /// T5 message size in bytes
    pub message_size: u16,
    /// First report id owned by T9
    pub touch_first_report: u8,
    /// Number of report ids owned by T9
    pub touch_report_count: u8,
}

impl ObjectMap {
    /// Decode one T5 message into a touch sample
    ///
    /// T9 layout: report id, status, X[11:4], Y[11:4], X[3:0]|Y[3:0], ...
    pub fn decode<E>(&self, message: &[u8; MESSAGE_LEN]) -> Result<TouchSample, MxtError<E>> {
        let report = message[0];
        let offset = report.wrapping_sub(self.touch_first_report);
        if report == NO_MESSAGE || offset >= self.touch_report_count {
            return Err(MxtError::UnexpectedReport(report));
        }

        let x = (u16::from(message[2]) << 4) | u16::from(message[4] >> 4);
        let y = (u16::from(message[3]) << 4) | u16::from(message[4] & 0x0F);
        Ok(TouchSample::new(offset, x, y, message[1]))
    }
}

/// maXTouch driver
pub struct Mxt<I2C, CHG> {
    i2c: I2C,
    chg: CHG,
    address: u8,
    objects: Option<ObjectMap>,
}

impl<I2C, CHG, E> Mxt<I2C, CHG>
where
    I2C: I2c<SevenBitAddress, Error = E>,
    CHG: InputPin,
{
    pub fn new(i2c: I2C, chg: CHG, address: u8) -> Self {
        Self {
            i2c,
            chg,
            address,
            objects: None,
        }
    }

    /// Read the information block and object table, then enable reporting
    pub fn init(&mut self) -> Result<InfoBlock, MxtError<E>> {
        let mut raw = [0u8; INFO_BLOCK_LEN];
        self.read_register(0, &mut raw)?;
        let info = InfoBlock::parse(&raw);
        if info.object_count == 0 || info.object_count > MAX_OBJECTS {
            return Err(MxtError::InvalidInfoBlock);
        }

        let mut t5 = None;
        let mut t7 = None;
        let mut t9 = None;
        // Report id 0 is reserved
        let mut next_report: u16 = 1;

        for index in 0..u16::from(info.object_count) {
            let mut entry = [0u8; OBJECT_ENTRY_LEN];
            let address = INFO_BLOCK_LEN as u16 + index * OBJECT_ENTRY_LEN as u16;
            self.read_register(address, &mut entry)?;
            let object = ObjectEntry::parse(&entry);

            match object.kind {
                GEN_MESSAGEPROCESSOR_T5 => t5 = Some(object),
                GEN_POWERCONFIG_T7 => t7 = Some(object),
                TOUCH_MULTITOUCHSCREEN_T9 => t9 = Some((object, next_report)),
                _ => {}
            }
            next_report = next_report.saturating_add(object.report_count());
        }

        let t5 = t5.ok_or(MxtError::ObjectNotFound(GEN_MESSAGEPROCESSOR_T5))?;
        let t7 = t7.ok_or(MxtError::ObjectNotFound(GEN_POWERCONFIG_T7))?;
        let (t9, first_report) = t9.ok_or(MxtError::ObjectNotFound(TOUCH_MULTITOUCHSCREEN_T9))?;

        let touch_first_report =
            u8::try_from(first_report).map_err(|_| MxtError::InvalidInfoBlock)?;
        let touch_report_count =
            u8::try_from(t9.report_count()).map_err(|_| MxtError::InvalidInfoBlock)?;

        self.write_register(t7.start, &POWER_CONFIG)?;
        self.objects = Some(ObjectMap {
            message_processor: t5.start,
            message_size: t5.size,
            touch_first_report,
            touch_report_count,
        });

        Ok(info)
    }

    /// Object addresses found by `init`
    pub fn objects(&self) -> Option<&ObjectMap> {
        self.objects.as_ref()
    }

    /// Read one queued message and decode it
    pub fn read_message(&mut self) -> Result<TouchSample, MxtError<E>> {
        let map = self.objects.ok_or(MxtError::NotInitialized)?;
        let mut message = [0u8; MESSAGE_LEN];
        let len = usize::from(map.message_size).min(MESSAGE_LEN);
        self.read_register(map.message_processor, &mut message[..len])?;
        map.decode(&message)
    }

    fn read_register(&mut self, register: u16, buf: &mut [u8]) -> Result<(), MxtError<E>> {
        self.i2c
            .write_read(self.address, &register.to_le_bytes(), buf)
            .map_err(MxtError::I2c)
    }

    fn write_register(&mut self, register: u16, data: &[u8]) -> Result<(), MxtError<E>> {
        let mut buf: Vec<u8, MAX_WRITE_LEN> = Vec::new();
        buf.extend_from_slice(&register.to_le_bytes())
            .map_err(|_| MxtError::BufferOverflow)?;
        buf.extend_from_slice(data)
            .map_err(|_| MxtError::BufferOverflow)?;

        self.i2c.write(self.address, &buf).map_err(MxtError::I2c)
    }
}

impl<I2C, CHG, E> TouchSensor for Mxt<I2C, CHG>
where
    I2C: I2c<SevenBitAddress, Error = E>,
    CHG: InputPin,
{
    type Error = MxtError<E>;

    fn is_sample_pending(&mut self) -> bool {
        // CHG is active low
        self.chg.is_low().unwrap_or(false)
    }

    fn read_sample(&mut self) -> Result<TouchSample, Self::Error> {
        self.read_message()
    }
}
