//! IRC numeric reply codes.
//!
//! Servers answer commands with three-digit numerics. This module maps
//! each numeric to its symbolic `RPL_*`/`ERR_*` name at the canonical
//! RFC 2812 value, including the reserved/historic block, so callers
//! can match on names instead of bare integers.

#![allow(non_camel_case_types)]

use crate::error::ProtocolError;

/// An IRC server numeric reply.
///
/// Grouped by range:
/// - 001–099: connection/registration
/// - 200–399: command replies
/// - 400–599: error replies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
#[non_exhaustive]
pub enum Response {
    /// 001 - Welcome to the IRC network
    RPL_WELCOME = 1,
    /// 002 - Your host is running version
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 004 - Server info
    RPL_MYINFO = 4,
    /// 005 - Bounce to another server
    RPL_BOUNCE = 5,

    /// 200 - Trace link
    RPL_TRACELINK = 200,
    /// 201 - Trace connecting
    RPL_TRACECONNECTING = 201,
    /// 202 - Trace handshake
    RPL_TRACEHANDSHAKE = 202,
    /// 203 - Trace unknown
    RPL_TRACEUNKNOWN = 203,
    /// 204 - Trace operator
    RPL_TRACEOPERATOR = 204,
    /// 205 - Trace user
    RPL_TRACEUSER = 205,
    /// 206 - Trace server
    RPL_TRACESERVER = 206,
    /// 207 - Trace service
    RPL_TRACESERVICE = 207,
    /// 208 - Trace new type
    RPL_TRACENEWTYPE = 208,
    /// 209 - Trace class
    RPL_TRACECLASS = 209,
    /// 210 - Trace reconnect
    RPL_TRACERECONNECT = 210,
    /// 211 - Stats link info
    RPL_STATSLINKINFO = 211,
    /// 212 - Stats commands
    RPL_STATSCOMMANDS = 212,
    /// 213 - Stats C-line (reserved)
    RPL_STATSCLINE = 213,
    /// 214 - Stats N-line (reserved)
    RPL_STATSNLINE = 214,
    /// 215 - Stats I-line (reserved)
    RPL_STATSILINE = 215,
    /// 216 - Stats K-line (reserved)
    RPL_STATSKLINE = 216,
    /// 217 - Stats Q-line (reserved)
    RPL_STATSQLINE = 217,
    /// 218 - Stats Y-line (reserved)
    RPL_STATSYLINE = 218,
    /// 219 - End of stats
    RPL_ENDOFSTATS = 219,
    /// 221 - User mode string
    RPL_UMODEIS = 221,
    /// 231 - Service info (reserved)
    RPL_SERVICEINFO = 231,
    /// 232 - End of services (reserved)
    RPL_ENDOFSERVICES = 232,
    /// 233 - Service (reserved)
    RPL_SERVICE = 233,
    /// 234 - Service list
    RPL_SERVLIST = 234,
    /// 235 - Service list end
    RPL_SERVLISTEND = 235,
    /// 240 - Stats V-line (reserved)
    RPL_STATSVLINE = 240,
    /// 241 - Stats L-line (reserved)
    RPL_STATSLLINE = 241,
    /// 242 - Stats uptime
    RPL_STATSUPTIME = 242,
    /// 243 - Stats O-line
    RPL_STATSOLINE = 243,
    /// 244 - Stats H-line (reserved)
    RPL_STATSHLINE = 244,
    /// 245 - Stats S-line (reserved)
    RPL_STATSSLINE = 245,
    /// 246 - Stats ping (reserved)
    RPL_STATSPING = 246,
    /// 247 - Stats B-line (reserved)
    RPL_STATSBLINE = 247,
    /// 250 - Stats D-line (reserved)
    RPL_STATSDLINE = 250,
    /// 251 - Luser client count
    RPL_LUSERCLIENT = 251,
    /// 252 - Luser operator count
    RPL_LUSEROP = 252,
    /// 253 - Luser unknown connections
    RPL_LUSERUNKNOWN = 253,
    /// 254 - Luser channel count
    RPL_LUSERCHANNELS = 254,
    /// 255 - Luser local info
    RPL_LUSERME = 255,
    /// 256 - Admin info start
    RPL_ADMINME = 256,
    /// 257 - Admin location 1
    RPL_ADMINLOC1 = 257,
    /// 258 - Admin location 2
    RPL_ADMINLOC2 = 258,
    /// 259 - Admin email
    RPL_ADMINEMAIL = 259,
    /// 261 - Trace log
    RPL_TRACELOG = 261,
    /// 262 - Trace end
    RPL_TRACEEND = 262,
    /// 263 - Try again later
    RPL_TRYAGAIN = 263,

    /// 300 - Dummy reply (reserved)
    RPL_NONE = 300,
    /// 301 - Away message
    RPL_AWAY = 301,
    /// 302 - Userhost reply
    RPL_USERHOST = 302,
    /// 303 - Ison reply
    RPL_ISON = 303,
    /// 305 - No longer away
    RPL_UNAWAY = 305,
    /// 306 - Now marked away
    RPL_NOWAWAY = 306,
    /// 311 - Whois user
    RPL_WHOISUSER = 311,
    /// 312 - Whois server
    RPL_WHOISSERVER = 312,
    /// 313 - Whois operator
    RPL_WHOISOPERATOR = 313,
    /// 314 - Whowas user
    RPL_WHOWASUSER = 314,
    /// 315 - End of who
    RPL_ENDOFWHO = 315,
    /// 316 - Whois chanop (reserved)
    RPL_WHOISCHANOP = 316,
    /// 317 - Whois idle
    RPL_WHOISIDLE = 317,
    /// 318 - End of whois
    RPL_ENDOFWHOIS = 318,
    /// 319 - Whois channels
    RPL_WHOISCHANNELS = 319,
    /// 321 - List start
    RPL_LISTSTART = 321,
    /// 322 - List entry
    RPL_LIST = 322,
    /// 323 - List end
    RPL_LISTEND = 323,
    /// 324 - Channel mode is
    RPL_CHANNELMODEIS = 324,
    /// 325 - Unique channel operator
    RPL_UNIQOPIS = 325,
    /// 331 - No topic set
    RPL_NOTOPIC = 331,
    /// 332 - Channel topic
    RPL_TOPIC = 332,
    /// 341 - Inviting
    RPL_INVITING = 341,
    /// 342 - Summoning
    RPL_SUMMONING = 342,
    /// 346 - Invite list entry
    RPL_INVITELIST = 346,
    /// 347 - End of invite list
    RPL_ENDOFINVITELIST = 347,
    /// 348 - Exception list entry
    RPL_EXCEPTLIST = 348,
    /// 349 - End of exception list
    RPL_ENDOFEXCEPTLIST = 349,
    /// 351 - Server version
    RPL_VERSION = 351,
    /// 352 - Who reply
    RPL_WHOREPLY = 352,
    /// 353 - Names reply
    RPL_NAMREPLY = 353,
    /// 361 - Kill done (reserved)
    RPL_KILLDONE = 361,
    /// 362 - Closing (reserved)
    RPL_CLOSING = 362,
    /// 363 - Close end (reserved)
    RPL_CLOSEEND = 363,
    /// 364 - Links entry
    RPL_LINKS = 364,
    /// 365 - End of links
    RPL_ENDOFLINKS = 365,
    /// 366 - End of names
    RPL_ENDOFNAMES = 366,
    /// 367 - Ban list entry
    RPL_BANLIST = 367,
    /// 368 - End of ban list
    RPL_ENDOFBANLIST = 368,
    /// 369 - End of whowas
    RPL_ENDOFWHOWAS = 369,
    /// 371 - Info entry
    RPL_INFO = 371,
    /// 372 - MOTD line
    RPL_MOTD = 372,
    /// 373 - Info start (reserved)
    RPL_INFOSTART = 373,
    /// 374 - End of info
    RPL_ENDOFINFO = 374,
    /// 375 - MOTD start
    RPL_MOTDSTART = 375,
    /// 376 - End of MOTD
    RPL_ENDOFMOTD = 376,
    /// 381 - You are now an operator
    RPL_YOUREOPER = 381,
    /// 382 - Rehashing
    RPL_REHASHING = 382,
    /// 383 - You are a service
    RPL_YOURESERVICE = 383,
    /// 384 - My port is (reserved)
    RPL_MYPORTIS = 384,
    /// 391 - Server time
    RPL_TIME = 391,
    /// 392 - Users start
    RPL_USERSSTART = 392,
    /// 393 - Users entry
    RPL_USERS = 393,
    /// 394 - End of users
    RPL_ENDOFUSERS = 394,
    /// 395 - No users
    RPL_NOUSERS = 395,

    /// 401 - No such nick
    ERR_NOSUCHNICK = 401,
    /// 402 - No such server
    ERR_NOSUCHSERVER = 402,
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL = 403,
    /// 404 - Cannot send to channel
    ERR_CANNOTSENDTOCHAN = 404,
    /// 405 - Too many channels
    ERR_TOOMANYCHANNELS = 405,
    /// 406 - Was no such nick
    ERR_WASNOSUCHNICK = 406,
    /// 407 - Too many targets
    ERR_TOOMANYTARGETS = 407,
    /// 408 - No such service
    ERR_NOSUCHSERVICE = 408,
    /// 409 - No origin given
    ERR_NOORIGIN = 409,
    /// 411 - No recipient
    ERR_NORECIPIENT = 411,
    /// 412 - No text to send
    ERR_NOTEXTTOSEND = 412,
    /// 413 - No top level domain
    ERR_NOTOPLEVEL = 413,
    /// 414 - Wildcard top level domain
    ERR_WILDTOPLEVEL = 414,
    /// 415 - Bad server/host mask
    ERR_BADMASK = 415,
    /// 421 - Unknown command
    ERR_UNKNOWNCOMMAND = 421,
    /// 422 - No MOTD
    ERR_NOMOTD = 422,
    /// 423 - No admin info
    ERR_NOADMININFO = 423,
    /// 424 - File error
    ERR_FILEERROR = 424,
    /// 431 - No nickname given
    ERR_NONICKNAMEGIVEN = 431,
    /// 432 - Erroneous nickname
    ERR_ERRONEUSNICKNAME = 432,
    /// 433 - Nickname in use
    ERR_NICKNAMEINUSE = 433,
    /// 436 - Nickname collision
    ERR_NICKCOLLISION = 436,
    /// 437 - Resource unavailable
    ERR_UNAVAILRESOURCE = 437,
    /// 441 - User not in channel
    ERR_USERNOTINCHANNEL = 441,
    /// 442 - Not on channel
    ERR_NOTONCHANNEL = 442,
    /// 443 - User already on channel
    ERR_USERONCHANNEL = 443,
    /// 444 - No login
    ERR_NOLOGIN = 444,
    /// 445 - Summon disabled
    ERR_SUMMONDISABLED = 445,
    /// 446 - Users disabled
    ERR_USERSDISABLED = 446,
    /// 451 - Not registered
    ERR_NOTREGISTERED = 451,
    /// 461 - Need more parameters
    ERR_NEEDMOREPARAMS = 461,
    /// 462 - Already registered
    ERR_ALREADYREGISTRED = 462,
    /// 463 - No permission for host
    ERR_NOPERMFORHOST = 463,
    /// 464 - Password mismatch
    ERR_PASSWDMISMATCH = 464,
    /// 465 - You are banned
    ERR_YOUREBANNEDCREEP = 465,
    /// 466 - You will be banned
    ERR_YOUWILLBEBANNED = 466,
    /// 467 - Channel key already set
    ERR_KEYSET = 467,
    /// 471 - Channel is full
    ERR_CHANNELISFULL = 471,
    /// 472 - Unknown mode
    ERR_UNKNOWNMODE = 472,
    /// 473 - Invite-only channel
    ERR_INVITEONLYCHAN = 473,
    /// 474 - Banned from channel
    ERR_BANNEDFROMCHAN = 474,
    /// 475 - Bad channel key
    ERR_BADCHANNELKEY = 475,
    /// 476 - Bad channel mask
    ERR_BADCHANMASK = 476,
    /// 477 - Channel does not support modes
    ERR_NOCHANMODES = 477,
    /// 478 - Ban list full
    ERR_BANLISTFULL = 478,
    /// 481 - No privileges
    ERR_NOPRIVILEGES = 481,
    /// 482 - Channel operator privileges needed
    ERR_CHANOPRIVSNEEDED = 482,
    /// 483 - Cannot kill a server
    ERR_CANTKILLSERVER = 483,
    /// 484 - Restricted connection
    ERR_RESTRICTED = 484,
    /// 485 - Unique operator privileges needed
    ERR_UNIQOPPRIVSNEEDED = 485,
    /// 491 - No operator host
    ERR_NOOPERHOST = 491,
    /// 492 - No service host (reserved)
    ERR_NOSERVICEHOST = 492,
    /// 501 - Unknown user mode flag
    ERR_UMODEUNKNOWNFLAG = 501,
    /// 502 - Cannot change mode for other users
    ERR_USERSDONTMATCH = 502,
}

/// The numeric-to-name table, sorted by code for binary search.
static TABLE: &[(u16, Response, &str)] = &[
    (1, Response::RPL_WELCOME, "RPL_WELCOME"),
    (2, Response::RPL_YOURHOST, "RPL_YOURHOST"),
    (3, Response::RPL_CREATED, "RPL_CREATED"),
    (4, Response::RPL_MYINFO, "RPL_MYINFO"),
    (5, Response::RPL_BOUNCE, "RPL_BOUNCE"),
    (200, Response::RPL_TRACELINK, "RPL_TRACELINK"),
    (201, Response::RPL_TRACECONNECTING, "RPL_TRACECONNECTING"),
    (202, Response::RPL_TRACEHANDSHAKE, "RPL_TRACEHANDSHAKE"),
    (203, Response::RPL_TRACEUNKNOWN, "RPL_TRACEUNKNOWN"),
    (204, Response::RPL_TRACEOPERATOR, "RPL_TRACEOPERATOR"),
    (205, Response::RPL_TRACEUSER, "RPL_TRACEUSER"),
    (206, Response::RPL_TRACESERVER, "RPL_TRACESERVER"),
    (207, Response::RPL_TRACESERVICE, "RPL_TRACESERVICE"),
    (208, Response::RPL_TRACENEWTYPE, "RPL_TRACENEWTYPE"),
    (209, Response::RPL_TRACECLASS, "RPL_TRACECLASS"),
    (210, Response::RPL_TRACERECONNECT, "RPL_TRACERECONNECT"),
    (211, Response::RPL_STATSLINKINFO, "RPL_STATSLINKINFO"),
    (212, Response::RPL_STATSCOMMANDS, "RPL_STATSCOMMANDS"),
    (213, Response::RPL_STATSCLINE, "RPL_STATSCLINE"),
    (214, Response::RPL_STATSNLINE, "RPL_STATSNLINE"),
    (215, Response::RPL_STATSILINE, "RPL_STATSILINE"),
    (216, Response::RPL_STATSKLINE, "RPL_STATSKLINE"),
    (217, Response::RPL_STATSQLINE, "RPL_STATSQLINE"),
    (218, Response::RPL_STATSYLINE, "RPL_STATSYLINE"),
    (219, Response::RPL_ENDOFSTATS, "RPL_ENDOFSTATS"),
    (221, Response::RPL_UMODEIS, "RPL_UMODEIS"),
    (231, Response::RPL_SERVICEINFO, "RPL_SERVICEINFO"),
    (232, Response::RPL_ENDOFSERVICES, "RPL_ENDOFSERVICES"),
    (233, Response::RPL_SERVICE, "RPL_SERVICE"),
    (234, Response::RPL_SERVLIST, "RPL_SERVLIST"),
    (235, Response::RPL_SERVLISTEND, "RPL_SERVLISTEND"),
    (240, Response::RPL_STATSVLINE, "RPL_STATSVLINE"),
    (241, Response::RPL_STATSLLINE, "RPL_STATSLLINE"),
    (242, Response::RPL_STATSUPTIME, "RPL_STATSUPTIME"),
    (243, Response::RPL_STATSOLINE, "RPL_STATSOLINE"),
    (244, Response::RPL_STATSHLINE, "RPL_STATSHLINE"),
    (245, Response::RPL_STATSSLINE, "RPL_STATSSLINE"),
    (246, Response::RPL_STATSPING, "RPL_STATSPING"),
    (247, Response::RPL_STATSBLINE, "RPL_STATSBLINE"),
    (250, Response::RPL_STATSDLINE, "RPL_STATSDLINE"),
    (251, Response::RPL_LUSERCLIENT, "RPL_LUSERCLIENT"),
    (252, Response::RPL_LUSEROP, "RPL_LUSEROP"),
    (253, Response::RPL_LUSERUNKNOWN, "RPL_LUSERUNKNOWN"),
    (254, Response::RPL_LUSERCHANNELS, "RPL_LUSERCHANNELS"),
    (255, Response::RPL_LUSERME, "RPL_LUSERME"),
    (256, Response::RPL_ADMINME, "RPL_ADMINME"),
    (257, Response::RPL_ADMINLOC1, "RPL_ADMINLOC1"),
    (258, Response::RPL_ADMINLOC2, "RPL_ADMINLOC2"),
    (259, Response::RPL_ADMINEMAIL, "RPL_ADMINEMAIL"),
    (261, Response::RPL_TRACELOG, "RPL_TRACELOG"),
    (262, Response::RPL_TRACEEND, "RPL_TRACEEND"),
    (263, Response::RPL_TRYAGAIN, "RPL_TRYAGAIN"),
    (300, Response::RPL_NONE, "RPL_NONE"),
    (301, Response::RPL_AWAY, "RPL_AWAY"),
    (302, Response::RPL_USERHOST, "RPL_USERHOST"),
    (303, Response::RPL_ISON, "RPL_ISON"),
    (305, Response::RPL_UNAWAY, "RPL_UNAWAY"),
    (306, Response::RPL_NOWAWAY, "RPL_NOWAWAY"),
    (311, Response::RPL_WHOISUSER, "RPL_WHOISUSER"),
    (312, Response::RPL_WHOISSERVER, "RPL_WHOISSERVER"),
    (313, Response::RPL_WHOISOPERATOR, "RPL_WHOISOPERATOR"),
    (314, Response::RPL_WHOWASUSER, "RPL_WHOWASUSER"),
    (315, Response::RPL_ENDOFWHO, "RPL_ENDOFWHO"),
    (316, Response::RPL_WHOISCHANOP, "RPL_WHOISCHANOP"),
    (317, Response::RPL_WHOISIDLE, "RPL_WHOISIDLE"),
    (318, Response::RPL_ENDOFWHOIS, "RPL_ENDOFWHOIS"),
    (319, Response::RPL_WHOISCHANNELS, "RPL_WHOISCHANNELS"),
    (321, Response::RPL_LISTSTART, "RPL_LISTSTART"),
    (322, Response::RPL_LIST, "RPL_LIST"),
    (323, Response::RPL_LISTEND, "RPL_LISTEND"),
    (324, Response::RPL_CHANNELMODEIS, "RPL_CHANNELMODEIS"),
    (325, Response::RPL_UNIQOPIS, "RPL_UNIQOPIS"),
    (331, Response::RPL_NOTOPIC, "RPL_NOTOPIC"),
    (332, Response::RPL_TOPIC, "RPL_TOPIC"),
    (341, Response::RPL_INVITING, "RPL_INVITING"),
    (342, Response::RPL_SUMMONING, "RPL_SUMMONING"),
    (346, Response::RPL_INVITELIST, "RPL_INVITELIST"),
    (347, Response::RPL_ENDOFINVITELIST, "RPL_ENDOFINVITELIST"),
    (348, Response::RPL_EXCEPTLIST, "RPL_EXCEPTLIST"),
    (349, Response::RPL_ENDOFEXCEPTLIST, "RPL_ENDOFEXCEPTLIST"),
    (351, Response::RPL_VERSION, "RPL_VERSION"),
    (352, Response::RPL_WHOREPLY, "RPL_WHOREPLY"),
    (353, Response::RPL_NAMREPLY, "RPL_NAMREPLY"),
    (361, Response::RPL_KILLDONE, "RPL_KILLDONE"),
    (362, Response::RPL_CLOSING, "RPL_CLOSING"),
    (363, Response::RPL_CLOSEEND, "RPL_CLOSEEND"),
    (364, Response::RPL_LINKS, "RPL_LINKS"),
    (365, Response::RPL_ENDOFLINKS, "RPL_ENDOFLINKS"),
    (366, Response::RPL_ENDOFNAMES, "RPL_ENDOFNAMES"),
    (367, Response::RPL_BANLIST, "RPL_BANLIST"),
    (368, Response::RPL_ENDOFBANLIST, "RPL_ENDOFBANLIST"),
    (369, Response::RPL_ENDOFWHOWAS, "RPL_ENDOFWHOWAS"),
    (371, Response::RPL_INFO, "RPL_INFO"),
    (372, Response::RPL_MOTD, "RPL_MOTD"),
    (373, Response::RPL_INFOSTART, "RPL_INFOSTART"),
    (374, Response::RPL_ENDOFINFO, "RPL_ENDOFINFO"),
    (375, Response::RPL_MOTDSTART, "RPL_MOTDSTART"),
    (376, Response::RPL_ENDOFMOTD, "RPL_ENDOFMOTD"),
    (381, Response::RPL_YOUREOPER, "RPL_YOUREOPER"),
    (382, Response::RPL_REHASHING, "RPL_REHASHING"),
    (383, Response::RPL_YOURESERVICE, "RPL_YOURESERVICE"),
    (384, Response::RPL_MYPORTIS, "RPL_MYPORTIS"),
    (391, Response::RPL_TIME, "RPL_TIME"),
    (392, Response::RPL_USERSSTART, "RPL_USERSSTART"),
    (393, Response::RPL_USERS, "RPL_USERS"),
    (394, Response::RPL_ENDOFUSERS, "RPL_ENDOFUSERS"),
    (395, Response::RPL_NOUSERS, "RPL_NOUSERS"),
    (401, Response::ERR_NOSUCHNICK, "ERR_NOSUCHNICK"),
    (402, Response::ERR_NOSUCHSERVER, "ERR_NOSUCHSERVER"),
    (403, Response::ERR_NOSUCHCHANNEL, "ERR_NOSUCHCHANNEL"),
    (404, Response::ERR_CANNOTSENDTOCHAN, "ERR_CANNOTSENDTOCHAN"),
    (405, Response::ERR_TOOMANYCHANNELS, "ERR_TOOMANYCHANNELS"),
    (406, Response::ERR_WASNOSUCHNICK, "ERR_WASNOSUCHNICK"),
    (407, Response::ERR_TOOMANYTARGETS, "ERR_TOOMANYTARGETS"),
    (408, Response::ERR_NOSUCHSERVICE, "ERR_NOSUCHSERVICE"),
    (409, Response::ERR_NOORIGIN, "ERR_NOORIGIN"),
    (411, Response::ERR_NORECIPIENT, "ERR_NORECIPIENT"),
    (412, Response::ERR_NOTEXTTOSEND, "ERR_NOTEXTTOSEND"),
    (413, Response::ERR_NOTOPLEVEL, "ERR_NOTOPLEVEL"),
    (414, Response::ERR_WILDTOPLEVEL, "ERR_WILDTOPLEVEL"),
    (415, Response::ERR_BADMASK, "ERR_BADMASK"),
    (421, Response::ERR_UNKNOWNCOMMAND, "ERR_UNKNOWNCOMMAND"),
    (422, Response::ERR_NOMOTD, "ERR_NOMOTD"),
    (423, Response::ERR_NOADMININFO, "ERR_NOADMININFO"),
    (424, Response::ERR_FILEERROR, "ERR_FILEERROR"),
    (431, Response::ERR_NONICKNAMEGIVEN, "ERR_NONICKNAMEGIVEN"),
    (432, Response::ERR_ERRONEUSNICKNAME, "ERR_ERRONEUSNICKNAME"),
    (433, Response::ERR_NICKNAMEINUSE, "ERR_NICKNAMEINUSE"),
    (436, Response::ERR_NICKCOLLISION, "ERR_NICKCOLLISION"),
    (437, Response::ERR_UNAVAILRESOURCE, "ERR_UNAVAILRESOURCE"),
    (441, Response::ERR_USERNOTINCHANNEL, "ERR_USERNOTINCHANNEL"),
    (442, Response::ERR_NOTONCHANNEL, "ERR_NOTONCHANNEL"),
    (443, Response::ERR_USERONCHANNEL, "ERR_USERONCHANNEL"),
    (444, Response::ERR_NOLOGIN, "ERR_NOLOGIN"),
    (445, Response::ERR_SUMMONDISABLED, "ERR_SUMMONDISABLED"),
    (446, Response::ERR_USERSDISABLED, "ERR_USERSDISABLED"),
    (451, Response::ERR_NOTREGISTERED, "ERR_NOTREGISTERED"),
    (461, Response::ERR_NEEDMOREPARAMS, "ERR_NEEDMOREPARAMS"),
    (462, Response::ERR_ALREADYREGISTRED, "ERR_ALREADYREGISTRED"),
    (463, Response::ERR_NOPERMFORHOST, "ERR_NOPERMFORHOST"),
    (464, Response::ERR_PASSWDMISMATCH, "ERR_PASSWDMISMATCH"),
    (465, Response::ERR_YOUREBANNEDCREEP, "ERR_YOUREBANNEDCREEP"),
    (466, Response::ERR_YOUWILLBEBANNED, "ERR_YOUWILLBEBANNED"),
    (467, Response::ERR_KEYSET, "ERR_KEYSET"),
    (471, Response::ERR_CHANNELISFULL, "ERR_CHANNELISFULL"),
    (472, Response::ERR_UNKNOWNMODE, "ERR_UNKNOWNMODE"),
    (473, Response::ERR_INVITEONLYCHAN, "ERR_INVITEONLYCHAN"),
    (474, Response::ERR_BANNEDFROMCHAN, "ERR_BANNEDFROMCHAN"),
    (475, Response::ERR_BADCHANNELKEY, "ERR_BADCHANNELKEY"),
    (476, Response::ERR_BADCHANMASK, "ERR_BADCHANMASK"),
    (477, Response::ERR_NOCHANMODES, "ERR_NOCHANMODES"),
    (478, Response::ERR_BANLISTFULL, "ERR_BANLISTFULL"),
    (481, Response::ERR_NOPRIVILEGES, "ERR_NOPRIVILEGES"),
    (482, Response::ERR_CHANOPRIVSNEEDED, "ERR_CHANOPRIVSNEEDED"),
    (483, Response::ERR_CANTKILLSERVER, "ERR_CANTKILLSERVER"),
    (484, Response::ERR_RESTRICTED, "ERR_RESTRICTED"),
    (485, Response::ERR_UNIQOPPRIVSNEEDED, "ERR_UNIQOPPRIVSNEEDED"),
    (491, Response::ERR_NOOPERHOST, "ERR_NOOPERHOST"),
    (492, Response::ERR_NOSERVICEHOST, "ERR_NOSERVICEHOST"),
    (501, Response::ERR_UMODEUNKNOWNFLAG, "ERR_UMODEUNKNOWNFLAG"),
    (502, Response::ERR_USERSDONTMATCH, "ERR_USERSDONTMATCH"),
];

impl Response {
    /// Look up a numeric code in the table.
    pub fn from_code(code: u16) -> Option<Response> {
        TABLE
            .binary_search_by_key(&code, |&(c, _, _)| c)
            .ok()
            .map(|i| TABLE[i].1)
    }

    /// Parse a command token; succeeds only for known three-digit codes.
    pub fn parse(token: &str) -> Result<Response, ProtocolError> {
        if token.len() != 3 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProtocolError::InvalidMessage {
                line: token.to_owned(),
                position: 0,
            });
        }
        let code: u16 = token.parse().map_err(|_| ProtocolError::InvalidMessage {
            line: token.to_owned(),
            position: 0,
        })?;
        Response::from_code(code).ok_or(ProtocolError::UnknownNumeric(code))
    }

    /// The numeric value of this reply.
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// The symbolic `RPL_*`/`ERR_*` name.
    pub fn name(self) -> &'static str {
        let code = self.code();
        match TABLE.binary_search_by_key(&code, |&(c, _, _)| c) {
            Ok(i) => TABLE[i].2,
            // Every variant has a table row; unreachable in practice.
            Err(_) => "RPL_NONE",
        }
    }

    /// Whether this is an error reply (400–599 range).
    pub fn is_error(self) -> bool {
        (400..600).contains(&self.code())
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
