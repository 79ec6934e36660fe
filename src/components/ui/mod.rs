// Controlled UI primitives: every open flag and value is owned by the parent
pub mod alert_dialog;
pub mod button;
pub mod dialog;
pub mod select;
pub mod sheet;
pub mod tabs;

pub use alert_dialog::{
    AlertDialog, AlertDialogAction, AlertDialogCancel, AlertDialogDescription,
    AlertDialogFooter, AlertDialogHeader, AlertDialogTitle,
};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use dialog::{Dialog, DialogClose, DialogDescription, DialogFooter, DialogHeader, DialogTitle};
pub use select::Select;
pub use sheet::{Sheet, SheetSide};
pub use tabs::{Tabs, TabsContent, TabsList, TabsSlot, TabsTrigger};
