use crate::domain::model::CellularProvider;
use crate::domain::ports::TelephonyService;
use crate::utils::error::Result;
use async_trait::async_trait;
use zbus::fdo::ObjectManagerProxy;
use zbus::zvariant::OwnedObjectPath;
use zbus::{proxy, Connection};

const MM_SERVICE: &str = "org.freedesktop.ModemManager1";
const MM_PATH: &str = "/org/freedesktop/ModemManager1";
const MM_MODEM_INTERFACE: &str = "org.freedesktop.ModemManager1.Modem";

/// Modem device exposed by ModemManager.
#[proxy(
    default_service = "org.freedesktop.ModemManager1",
    interface = "org.freedesktop.ModemManager1.Modem",
    gen_blocking = false
)]
trait Modem {
    /// Object path of the SIM installed in this modem; `/` when the slot is empty.
    #[zbus(property)]
    fn sim(&self) -> zbus::Result<OwnedObjectPath>;
}

/// SIM card object exposed by ModemManager.
#[proxy(
    default_service = "org.freedesktop.ModemManager1",
    interface = "org.freedesktop.ModemManager1.Sim",
    gen_blocking = false
)]
trait Sim {
    /// The MCC and MNC (concatenated) of the SIM's home network operator.
    #[zbus(property)]
    fn operator_identifier(&self) -> zbus::Result<String>;
}

/// Platform telephony service backed by freedesktop ModemManager over D-Bus.
///
/// The connection is held for the lifetime of the adapter and reused across
/// queries. Any D-Bus failure (service absent, access denied) propagates
/// unhandled to the caller.
pub struct ModemManagerTelephony {
    connection: Connection,
}

impl ModemManagerTelephony {
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    /// Connects to the system bus, where ModemManager lives.
    pub async fn connect_system() -> Result<Self> {
        let connection = Connection::system().await?;
        Ok(Self::new(connection))
    }

    async fn modem_paths(&self) -> Result<Vec<OwnedObjectPath>> {
        let manager = ObjectManagerProxy::builder(&self.connection)
            .destination(MM_SERVICE)?
            .path(MM_PATH)?
            .build()
            .await?;

        let objects = manager.get_managed_objects().await?;
        let mut paths: Vec<OwnedObjectPath> = objects
            .into_iter()
            .filter(|(_, interfaces)| {
                interfaces
                    .keys()
                    .any(|name| name.as_str() == MM_MODEM_INTERFACE)
            })
            .map(|(path, _)| path)
            .collect();

        // ObjectManager hands back an unordered map; modem numbering in the
        // object path fixes the order.
        paths.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(paths)
    }
}

#[async_trait]
impl TelephonyService for ModemManagerTelephony {
    async fn subscriber_providers(&self) -> Result<Vec<CellularProvider>> {
        let mut providers = Vec::new();

        for path in self.modem_paths().await? {
            tracing::debug!("Inspecting modem at {}", path.as_str());
            let modem = ModemProxy::builder(&self.connection)
                .path(path.as_str())?
                .build()
                .await?;

            let sim_path = modem.sim().await?;
            if sim_path.as_str() == "/" {
                tracing::debug!("Modem has no SIM installed, skipping");
                continue;
            }

            let sim = SimProxy::builder(&self.connection)
                .path(sim_path.as_str())?
                .build()
                .await?;

            let identifier = sim.operator_identifier().await?;
            if identifier.is_empty() {
                // SIM present but its identity is unreadable (locked card,
                // not yet provisioned). Surfaces as a provider without codes.
                providers.push(CellularProvider::default());
            } else {
                providers.push(CellularProvider::from_operator_code(&identifier)?);
            }
        }

        Ok(providers)
    }
}
