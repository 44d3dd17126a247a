use std::io::Write;

use anyhow::Result;

use rota_core::Day;
use rota_roster::ShiftRanking;

/// Write a preferences CSV giving every named worker the default ranking on
/// every day.
pub fn template<W: Write>(names: &[String], out: W) -> Result<()> {
    let ranking = ShiftRanking::default();
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["worker", "day", "first", "second", "third"])?;
    for name in names {
        for day in Day::ALL {
            let [first, second, third] = ranking.as_array();
            writer.write_record([name.as_str(), day.as_str(), first.as_str(), second.as_str(), third.as_str()])?;
        }
    }
    writer.flush()?;
    Ok(())
}
