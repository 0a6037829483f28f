//! Clock display session
//!
//! [`ClockDisplay`] owns everything the clock face needs: the transport,
//! the framebuffer, the font, the configuration and the refresh
//! scheduler. The main loop calls [`ClockDisplay::poll`] as often as it
//! likes; frames go out at most once per refresh interval.

use monoclock_core::config::{ConfigError, DisplayConfig};
use monoclock_core::font::Font;
use monoclock_core::refresh::{RefreshAction, RefreshScheduler};
use monoclock_core::render::{draw_text, TextExtent};
use monoclock_core::time::TimeSource;
use monoclock_core::FrameBuffer;
use monoclock_hal::{Clock, OutputPin, SpiBus};

use crate::error::DisplayError;
use crate::ssd1306::Ssd1306;

/// OLED clock face
///
/// `W` and `P` are the panel width and page count of the framebuffer; the
/// defaults match the reference 128x32 panel.
pub struct ClockDisplay<'f, SPI, CS, DC, RST, CLK, const W: usize = 128, const P: usize = 4> {
    transport: Ssd1306<SPI, CS, DC, RST, CLK>,
    buffer: FrameBuffer<W, P>,
    font: Font<'f>,
    config: DisplayConfig,
    scheduler: RefreshScheduler,
    initialized: bool,
}

impl<'f, SPI, CS, DC, RST, CLK, const W: usize, const P: usize>
    ClockDisplay<'f, SPI, CS, DC, RST, CLK, W, P>
where
    SPI: SpiBus,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
    CLK: Clock,
{
    /// Create a display session
    ///
    /// Rejects configurations that do not match the framebuffer or do not
    /// fit the panel with `font`. The transport takes its timing from
    /// `config`, whatever it was built with.
    pub fn new(
        mut transport: Ssd1306<SPI, CS, DC, RST, CLK>,
        font: Font<'f>,
        config: DisplayConfig,
    ) -> Result<Self, ConfigError> {
        config.matches_buffer(W, P * 8)?;
        config.validate(font.cell_width)?;
        transport.set_timing(config.timing);

        Ok(Self {
            transport,
            buffer: FrameBuffer::new(),
            font,
            scheduler: RefreshScheduler::new(config.refresh_interval_ms),
            config,
            initialized: false,
        })
    }

    /// Bring up the controller and show a blank frame
    ///
    /// Must be called exactly once before [`poll`](Self::poll).
    pub fn initialize(&mut self) -> Result<(), DisplayError<SPI::Error>> {
        if self.initialized {
            return Err(DisplayError::AlreadyInitialized);
        }

        self.transport.bring_up(&self.config.init_params())?;

        self.buffer.clear(false);
        self.push_frame()?;
        self.transport.delay_ms(self.config.timing.post_clear_ms);

        self.initialized = true;
        Ok(())
    }

    /// Run one step of the refresh loop
    ///
    /// The first call after [`initialize`](Self::initialize) shows the
    /// greeting. Later calls draw the time from `time` whenever a refresh
    /// interval has passed, and do nothing otherwise.
    pub fn poll<T: TimeSource + ?Sized>(
        &mut self,
        time: &mut T,
    ) -> Result<RefreshAction, DisplayError<SPI::Error>> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        let action = self.scheduler.poll(self.transport.now_ms());
        match action {
            RefreshAction::Greeting => {
                self.transport.strobe_cs();
                let greeting = self.config.greeting.clone();
                self.render(&greeting)?;
                self.push_frame()?;
            }
            RefreshAction::Redraw => {
                let text = time.current_time();
                self.render(&text)?;
                self.push_frame()?;
            }
            RefreshAction::Idle => {}
        }

        Ok(action)
    }

    fn render(&mut self, text: &str) -> Result<TextExtent, DisplayError<SPI::Error>> {
        let extent = draw_text(
            &mut self.buffer,
            text,
            self.config.text_x,
            self.config.text_y,
            &self.font,
        )?;

        #[cfg(feature = "defmt")]
        if extent.blanks > 0 {
            defmt::debug!("{} glyph(s) missing from font", extent.blanks);
        }

        Ok(extent)
    }

    fn push_frame(&mut self) -> Result<(), DisplayError<SPI::Error>> {
        self.transport.send_frame(
            self.buffer.as_bytes(),
            self.config.width,
            self.config.height,
        )
    }

    /// Check if [`initialize`](Self::initialize) has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current framebuffer contents
    pub fn buffer(&self) -> &FrameBuffer<W, P> {
        &self.buffer
    }

    /// Active configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Give back the transport
    pub fn release(self) -> Ssd1306<SPI, CS, DC, RST, CLK> {
        self.transport
    }
}
