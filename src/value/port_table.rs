//! Well-known ports ordered by how often they are found open.
//!
//! `top-N` takes the first `N` entries; service names and `name*` wildcards
//! are resolved against the same table. Every port appears once. The first
//! thousand entries are the commonly open TCP ports; a few well-known
//! service ports follow them.

/// `(port, service name)` pairs, most common first.
pub const PORT_TABLE: &[(u16, &str)] = &[
    (80, "http"),
    (23, "telnet"),
    (443, "https"),
    (21, "ftp"),
    (22, "ssh"),
    (25, "smtp"),
    (3389, "ms-wbt-server"),
    (110, "pop3"),
    (445, "microsoft-ds"),
    (139, "netbios-ssn"),
    (143, "imap"),
    (53, "domain"),
    (135, "msrpc"),
    (3306, "mysql"),
    (8080, "http-proxy"),
    (1723, "pptp"),
    (111, "rpcbind"),
    (995, "pop3s"),
    (993, "imaps"),
    (5900, "vnc"),
    (1025, "nfs-or-iis"),
    (587, "submission"),
    (8888, "sun-answerbook"),
    (199, "smux"),
    (1720, "h323q931"),
    (465, "smtps"),
    (548, "afp"),
    (113, "ident"),
    (81, "hosts2-ns"),
    (6001, "x11-1"),
    (10000, "snet-sensor-mgmt"),
    (514, "shell"),
    (5060, "sip"),
    (179, "bgp"),
    (1026, "lsa-or-nterm"),
    (2000, "cisco-sccp"),
    (8443, "https-alt"),
    (8000, "http-alt"),
    (32768, "filenet-tms"),
    (554, "rtsp"),
    (26, "rsftp"),
    (1433, "ms-sql-s"),
    (2001, "dc"),
    (515, "printer"),
    (8008, "http"),
    (1027, "iis"),
    (5666, "nrpe"),
    (646, "ldp"),
    (5000, "upnp"),
    (5631, "pcanywheredata"),
    (631, "ipp"),
    (8081, "blackice-icecap"),
    (2049, "nfs"),
    (88, "kerberos-sec"),
    (79, "finger"),
    (5800, "vnc-http"),
    (106, "pop3pw"),
    (2121, "ccproxy-ftp"),
    (1110, "nfsd-status"),
    (6000, "x11"),
    (513, "login"),
    (990, "ftps"),
    (5357, "wsdapi"),
    (427, "svrloc"),
    (543, "klogin"),
    (544, "kshell"),
    (5101, "admdog"),
    (144, "news"),
    (7, "echo"),
    (389, "ldap"),
    (8009, "ajp13"),
    (3128, "squid-http"),
    (444, "snpp"),
    (9999, "abyss"),
    (5009, "airport-admin"),
    (7070, "realserver"),
    (5190, "aol"),
    (3000, "ppp"),
    (5432, "postgresql"),
    (1900, "upnp"),
    (3986, "mapper-ws-ethd"),
    (13, "daytime"),
    (1029, "ms-lsa"),
    (9, "discard"),
    (5051, "ida-agent"),
    (873, "rsync"),
    (1755, "wms"),
    (2717, "pn-requester"),
    (4899, "radmin"),
    (9100, "jetdirect"),
    (119, "nntp"),
    (37, "time"),
    (1000, "cadlock"),
    (3001, "nessus"),
    (5001, "commplex-link"),
    (82, "xfer"),
    (10010, "rxapi"),
    (1030, "iad1"),
    (9090, "zeus-admin"),
    (2107, "msmq-mgmt"),
    (1024, "kdm"),
    (2103, "zephyr-clt"),
    (6004, "x11-4"),
    (1801, "msmq"),
    (5050, "mmcc"),
    (19, "chargen"),
    (1041, "danf-ak2"),
    (1048, "neod2"),
    (1049, "td-postman"),
    (1053, "remote-as"),
    (1054, "brvread"),
    (1056, "vfo"),
    (1064, "jstel"),
    (1065, "syscomlan"),
    (2967, "symantec-av"),
    (3703, "adobeserver-3"),
    (17, "qotd"),
    (808, "ccproxy-http"),
    (3689, "rendezvous"),
    (1031, "iad2"),
    (1044, "dcutility"),
    (1071, "bsquare-voip"),
    (5901, "vnc-1"),
    (100, "newacct"),
    (9102, "jetdirect-2"),
    (8010, "xmpp"),
    (2869, "icslap"),
    (1039, "sbl"),
    (5120, "barracuda-bbs"),
    (4001, "newoak"),
    (9000, "cslistener"),
    (2105, "eklogin"),
    (636, "ldapssl"),
    (1038, "mtqp"),
    (2601, "zebra"),
    (1, "tcpmux"),
    (7000, "afs3-fileserver"),
    (20, "ftp-data"),
    (161, "snmp"),
    (500, "isakmp"),
    (1812, "radius"),
    (8021, "ftp-proxy"),
    (3, "unknown"),
    (4, "unknown"),
    (6, "unknown"),
    (24, "unknown"),
    (30, "unknown"),
    (32, "unknown"),
    (33, "unknown"),
    (42, "unknown"),
    (43, "unknown"),
    (49, "unknown"),
    (70, "unknown"),
    (83, "unknown"),
    (84, "unknown"),
    (85, "unknown"),
    (89, "unknown"),
    (90, "unknown"),
    (99, "unknown"),
    (109, "unknown"),
    (125, "unknown"),
    (146, "unknown"),
    (163, "unknown"),
    (211, "unknown"),
    (212, "unknown"),
    (222, "unknown"),
    (254, "unknown"),
    (255, "unknown"),
    (256, "unknown"),
    (259, "unknown"),
    (264, "unknown"),
    (280, "unknown"),
    (301, "unknown"),
    (306, "unknown"),
    (311, "unknown"),
    (340, "unknown"),
    (366, "unknown"),
    (406, "unknown"),
    (407, "unknown"),
    (416, "unknown"),
    (417, "unknown"),
    (425, "unknown"),
    (458, "unknown"),
    (464, "unknown"),
    (481, "unknown"),
    (497, "unknown"),
    (512, "unknown"),
    (524, "unknown"),
    (541, "unknown"),
    (545, "unknown"),
    (555, "unknown"),
    (563, "unknown"),
    (593, "unknown"),
    (616, "unknown"),
    (617, "unknown"),
    (625, "unknown"),
    (648, "unknown"),
    (666, "unknown"),
    (667, "unknown"),
    (668, "unknown"),
    (683, "unknown"),
    (687, "unknown"),
    (691, "unknown"),
    (700, "unknown"),
    (705, "unknown"),
    (711, "unknown"),
    (714, "unknown"),
    (720, "unknown"),
    (722, "unknown"),
    (726, "unknown"),
    (749, "unknown"),
    (765, "unknown"),
    (777, "unknown"),
    (783, "unknown"),
    (787, "unknown"),
    (800, "unknown"),
    (801, "unknown"),
    (843, "unknown"),
    (880, "unknown"),
    (888, "unknown"),
    (898, "unknown"),
    (900, "unknown"),
    (901, "unknown"),
    (902, "unknown"),
    (903, "unknown"),
    (911, "unknown"),
    (912, "unknown"),
    (981, "unknown"),
    (987, "unknown"),
    (992, "unknown"),
    (999, "unknown"),
    (1001, "unknown"),
    (1002, "unknown"),
    (1007, "unknown"),
    (1009, "unknown"),
    (1010, "unknown"),
    (1011, "unknown"),
    (1021, "unknown"),
    (1022, "unknown"),
    (1023, "unknown"),
    (1028, "unknown"),
    (1032, "unknown"),
    (1033, "unknown"),
    (1034, "unknown"),
    (1035, "unknown"),
    (1036, "unknown"),
    (1037, "unknown"),
    (1040, "unknown"),
    (1042, "unknown"),
    (1043, "unknown"),
    (1045, "unknown"),
    (1046, "unknown"),
    (1047, "unknown"),
    (1050, "unknown"),
    (1051, "unknown"),
    (1052, "unknown"),
    (1055, "unknown"),
    (1057, "unknown"),
    (1058, "unknown"),
    (1059, "unknown"),
    (1060, "unknown"),
    (1061, "unknown"),
    (1062, "unknown"),
    (1063, "unknown"),
    (1066, "unknown"),
    (1067, "unknown"),
    (1068, "unknown"),
    (1069, "unknown"),
    (1070, "unknown"),
    (1072, "unknown"),
    (1073, "unknown"),
    (1074, "unknown"),
    (1075, "unknown"),
    (1076, "unknown"),
    (1077, "unknown"),
    (1078, "unknown"),
    (1079, "unknown"),
    (1080, "unknown"),
    (1081, "unknown"),
    (1082, "unknown"),
    (1083, "unknown"),
    (1084, "unknown"),
    (1085, "unknown"),
    (1086, "unknown"),
    (1087, "unknown"),
    (1088, "unknown"),
    (1089, "unknown"),
    (1090, "unknown"),
    (1091, "unknown"),
    (1092, "unknown"),
    (1093, "unknown"),
    (1094, "unknown"),
    (1095, "unknown"),
    (1096, "unknown"),
    (1097, "unknown"),
    (1098, "unknown"),
    (1099, "unknown"),
    (1100, "unknown"),
    (1102, "unknown"),
    (1104, "unknown"),
    (1105, "unknown"),
    (1106, "unknown"),
    (1107, "unknown"),
    (1108, "unknown"),
    (1111, "unknown"),
    (1112, "unknown"),
    (1113, "unknown"),
    (1114, "unknown"),
    (1117, "unknown"),
    (1119, "unknown"),
    (1121, "unknown"),
    (1122, "unknown"),
    (1123, "unknown"),
    (1124, "unknown"),
    (1126, "unknown"),
    (1130, "unknown"),
    (1131, "unknown"),
    (1132, "unknown"),
    (1137, "unknown"),
    (1138, "unknown"),
    (1141, "unknown"),
    (1145, "unknown"),
    (1147, "unknown"),
    (1148, "unknown"),
    (1149, "unknown"),
    (1151, "unknown"),
    (1152, "unknown"),
    (1154, "unknown"),
    (1163, "unknown"),
    (1164, "unknown"),
    (1165, "unknown"),
    (1166, "unknown"),
    (1169, "unknown"),
    (1174, "unknown"),
    (1175, "unknown"),
    (1183, "unknown"),
    (1185, "unknown"),
    (1186, "unknown"),
    (1187, "unknown"),
    (1192, "unknown"),
    (1198, "unknown"),
    (1199, "unknown"),
    (1201, "unknown"),
    (1213, "unknown"),
    (1216, "unknown"),
    (1217, "unknown"),
    (1218, "unknown"),
    (1233, "unknown"),
    (1234, "unknown"),
    (1236, "unknown"),
    (1244, "unknown"),
    (1247, "unknown"),
    (1248, "unknown"),
    (1259, "unknown"),
    (1271, "unknown"),
    (1272, "unknown"),
    (1277, "unknown"),
    (1287, "unknown"),
    (1296, "unknown"),
    (1300, "unknown"),
    (1301, "unknown"),
    (1309, "unknown"),
    (1310, "unknown"),
    (1311, "unknown"),
    (1322, "unknown"),
    (1328, "unknown"),
    (1334, "unknown"),
    (1352, "unknown"),
    (1417, "unknown"),
    (1434, "unknown"),
    (1443, "unknown"),
    (1455, "unknown"),
    (1461, "unknown"),
    (1494, "unknown"),
    (1500, "unknown"),
    (1501, "unknown"),
    (1503, "unknown"),
    (1521, "unknown"),
    (1524, "unknown"),
    (1533, "unknown"),
    (1556, "unknown"),
    (1580, "unknown"),
    (1583, "unknown"),
    (1594, "unknown"),
    (1600, "unknown"),
    (1641, "unknown"),
    (1658, "unknown"),
    (1666, "unknown"),
    (1687, "unknown"),
    (1688, "unknown"),
    (1700, "unknown"),
    (1717, "unknown"),
    (1718, "unknown"),
    (1719, "unknown"),
    (1721, "unknown"),
    (1761, "unknown"),
    (1782, "unknown"),
    (1783, "unknown"),
    (1805, "unknown"),
    (1839, "unknown"),
    (1840, "unknown"),
    (1862, "unknown"),
    (1863, "unknown"),
    (1864, "unknown"),
    (1875, "unknown"),
    (1914, "unknown"),
    (1935, "unknown"),
    (1947, "unknown"),
    (1971, "unknown"),
    (1972, "unknown"),
    (1974, "unknown"),
    (1984, "unknown"),
    (1998, "unknown"),
    (1999, "unknown"),
    (2002, "unknown"),
    (2003, "unknown"),
    (2004, "unknown"),
    (2005, "unknown"),
    (2006, "unknown"),
    (2007, "unknown"),
    (2008, "unknown"),
    (2009, "unknown"),
    (2010, "unknown"),
    (2013, "unknown"),
    (2020, "unknown"),
    (2021, "unknown"),
    (2022, "unknown"),
    (2030, "unknown"),
    (2033, "unknown"),
    (2034, "unknown"),
    (2035, "unknown"),
    (2038, "unknown"),
    (2040, "unknown"),
    (2041, "unknown"),
    (2042, "unknown"),
    (2043, "unknown"),
    (2045, "unknown"),
    (2046, "unknown"),
    (2047, "unknown"),
    (2048, "unknown"),
    (2065, "unknown"),
    (2068, "unknown"),
    (2099, "unknown"),
    (2100, "unknown"),
    (2106, "unknown"),
    (2111, "unknown"),
    (2119, "unknown"),
    (2126, "unknown"),
    (2135, "unknown"),
    (2144, "unknown"),
    (2160, "unknown"),
    (2161, "unknown"),
    (2170, "unknown"),
    (2179, "unknown"),
    (2190, "unknown"),
    (2191, "unknown"),
    (2196, "unknown"),
    (2200, "unknown"),
    (2222, "unknown"),
    (2251, "unknown"),
    (2260, "unknown"),
    (2288, "unknown"),
    (2301, "unknown"),
    (2323, "unknown"),
    (2366, "unknown"),
    (2381, "unknown"),
    (2382, "unknown"),
    (2383, "unknown"),
    (2393, "unknown"),
    (2394, "unknown"),
    (2399, "unknown"),
    (2401, "unknown"),
    (2492, "unknown"),
    (2500, "unknown"),
    (2522, "unknown"),
    (2525, "unknown"),
    (2557, "unknown"),
    (2602, "unknown"),
    (2604, "unknown"),
    (2605, "unknown"),
    (2607, "unknown"),
    (2608, "unknown"),
    (2638, "unknown"),
    (2701, "unknown"),
    (2702, "unknown"),
    (2710, "unknown"),
    (2718, "unknown"),
    (2725, "unknown"),
    (2800, "unknown"),
    (2809, "unknown"),
    (2811, "unknown"),
    (2875, "unknown"),
    (2909, "unknown"),
    (2910, "unknown"),
    (2920, "unknown"),
    (2968, "unknown"),
    (2998, "unknown"),
    (3003, "unknown"),
    (3005, "unknown"),
    (3006, "unknown"),
    (3007, "unknown"),
    (3011, "unknown"),
    (3013, "unknown"),
    (3017, "unknown"),
    (3030, "unknown"),
    (3031, "unknown"),
    (3052, "unknown"),
    (3071, "unknown"),
    (3077, "unknown"),
    (3168, "unknown"),
    (3211, "unknown"),
    (3221, "unknown"),
    (3260, "unknown"),
    (3261, "unknown"),
    (3268, "unknown"),
    (3269, "unknown"),
    (3283, "unknown"),
    (3300, "unknown"),
    (3301, "unknown"),
    (3322, "unknown"),
    (3323, "unknown"),
    (3324, "unknown"),
    (3325, "unknown"),
    (3333, "unknown"),
    (3351, "unknown"),
    (3367, "unknown"),
    (3369, "unknown"),
    (3370, "unknown"),
    (3371, "unknown"),
    (3372, "unknown"),
    (3390, "unknown"),
    (3404, "unknown"),
    (3476, "unknown"),
    (3493, "unknown"),
    (3517, "unknown"),
    (3527, "unknown"),
    (3546, "unknown"),
    (3551, "unknown"),
    (3580, "unknown"),
    (3659, "unknown"),
    (3690, "unknown"),
    (3737, "unknown"),
    (3766, "unknown"),
    (3784, "unknown"),
    (3800, "unknown"),
    (3801, "unknown"),
    (3809, "unknown"),
    (3814, "unknown"),
    (3826, "unknown"),
    (3827, "unknown"),
    (3828, "unknown"),
    (3851, "unknown"),
    (3869, "unknown"),
    (3871, "unknown"),
    (3878, "unknown"),
    (3880, "unknown"),
    (3889, "unknown"),
    (3905, "unknown"),
    (3914, "unknown"),
    (3918, "unknown"),
    (3920, "unknown"),
    (3945, "unknown"),
    (3971, "unknown"),
    (3995, "unknown"),
    (3998, "unknown"),
    (4000, "unknown"),
    (4002, "unknown"),
    (4003, "unknown"),
    (4004, "unknown"),
    (4005, "unknown"),
    (4006, "unknown"),
    (4045, "unknown"),
    (4111, "unknown"),
    (4125, "unknown"),
    (4126, "unknown"),
    (4129, "unknown"),
    (4224, "unknown"),
    (4242, "unknown"),
    (4279, "unknown"),
    (4321, "unknown"),
    (4343, "unknown"),
    (4443, "unknown"),
    (4444, "unknown"),
    (4445, "unknown"),
    (4446, "unknown"),
    (4449, "unknown"),
    (4550, "unknown"),
    (4567, "unknown"),
    (4662, "unknown"),
    (4848, "unknown"),
    (4900, "unknown"),
    (4998, "unknown"),
    (5002, "unknown"),
    (5003, "unknown"),
    (5004, "unknown"),
    (5030, "unknown"),
    (5033, "unknown"),
    (5054, "unknown"),
    (5061, "unknown"),
    (5080, "unknown"),
    (5087, "unknown"),
    (5100, "unknown"),
    (5102, "unknown"),
    (5200, "unknown"),
    (5214, "unknown"),
    (5221, "unknown"),
    (5222, "unknown"),
    (5225, "unknown"),
    (5226, "unknown"),
    (5269, "unknown"),
    (5280, "unknown"),
    (5298, "unknown"),
    (5405, "unknown"),
    (5414, "unknown"),
    (5431, "unknown"),
    (5440, "unknown"),
    (5500, "unknown"),
    (5510, "unknown"),
    (5544, "unknown"),
    (5550, "unknown"),
    (5555, "unknown"),
    (5560, "unknown"),
    (5566, "unknown"),
    (5633, "unknown"),
    (5678, "unknown"),
    (5679, "unknown"),
    (5718, "unknown"),
    (5730, "unknown"),
    (5801, "unknown"),
    (5802, "unknown"),
    (5810, "unknown"),
    (5811, "unknown"),
    (5815, "unknown"),
    (5822, "unknown"),
    (5825, "unknown"),
    (5850, "unknown"),
    (5859, "unknown"),
    (5862, "unknown"),
    (5877, "unknown"),
    (5902, "unknown"),
    (5903, "unknown"),
    (5904, "unknown"),
    (5906, "unknown"),
    (5907, "unknown"),
    (5910, "unknown"),
    (5911, "unknown"),
    (5915, "unknown"),
    (5922, "unknown"),
    (5925, "unknown"),
    (5950, "unknown"),
    (5952, "unknown"),
    (5959, "unknown"),
    (5960, "unknown"),
    (5961, "unknown"),
    (5962, "unknown"),
    (5963, "unknown"),
    (5987, "unknown"),
    (5988, "unknown"),
    (5989, "unknown"),
    (5998, "unknown"),
    (5999, "unknown"),
    (6002, "unknown"),
    (6003, "unknown"),
    (6005, "unknown"),
    (6006, "unknown"),
    (6007, "unknown"),
    (6009, "unknown"),
    (6025, "unknown"),
    (6059, "unknown"),
    (6100, "unknown"),
    (6101, "unknown"),
    (6106, "unknown"),
    (6112, "unknown"),
    (6123, "unknown"),
    (6129, "unknown"),
    (6156, "unknown"),
    (6346, "unknown"),
    (6389, "unknown"),
    (6502, "unknown"),
    (6510, "unknown"),
    (6543, "unknown"),
    (6547, "unknown"),
    (6565, "unknown"),
    (6566, "unknown"),
    (6567, "unknown"),
    (6580, "unknown"),
    (6646, "unknown"),
    (6666, "unknown"),
    (6667, "unknown"),
    (6668, "unknown"),
    (6669, "unknown"),
    (6689, "unknown"),
    (6692, "unknown"),
    (6699, "unknown"),
    (6779, "unknown"),
    (6788, "unknown"),
    (6789, "unknown"),
    (6792, "unknown"),
    (6839, "unknown"),
    (6881, "unknown"),
    (6901, "unknown"),
    (6969, "unknown"),
    (7001, "unknown"),
    (7002, "unknown"),
    (7004, "unknown"),
    (7007, "unknown"),
    (7019, "unknown"),
    (7025, "unknown"),
    (7100, "unknown"),
    (7103, "unknown"),
    (7106, "unknown"),
    (7200, "unknown"),
    (7201, "unknown"),
    (7402, "unknown"),
    (7435, "unknown"),
    (7443, "unknown"),
    (7496, "unknown"),
    (7512, "unknown"),
    (7625, "unknown"),
    (7627, "unknown"),
    (7676, "unknown"),
    (7741, "unknown"),
    (7777, "unknown"),
    (7778, "unknown"),
    (7800, "unknown"),
    (7911, "unknown"),
    (7920, "unknown"),
    (7921, "unknown"),
    (7937, "unknown"),
    (7938, "unknown"),
    (7999, "unknown"),
    (8001, "unknown"),
    (8002, "unknown"),
    (8007, "unknown"),
    (8011, "unknown"),
    (8022, "unknown"),
    (8031, "unknown"),
    (8042, "unknown"),
    (8045, "unknown"),
    (8082, "unknown"),
    (8083, "unknown"),
    (8084, "unknown"),
    (8085, "unknown"),
    (8086, "unknown"),
    (8087, "unknown"),
    (8088, "unknown"),
    (8089, "unknown"),
    (8090, "unknown"),
    (8093, "unknown"),
    (8099, "unknown"),
    (8100, "unknown"),
    (8180, "unknown"),
    (8181, "unknown"),
    (8192, "unknown"),
    (8193, "unknown"),
    (8194, "unknown"),
    (8200, "unknown"),
    (8222, "unknown"),
    (8254, "unknown"),
    (8290, "unknown"),
    (8291, "unknown"),
    (8292, "unknown"),
    (8300, "unknown"),
    (8333, "unknown"),
    (8383, "unknown"),
    (8400, "unknown"),
    (8402, "unknown"),
    (8500, "unknown"),
    (8600, "unknown"),
    (8649, "unknown"),
    (8651, "unknown"),
    (8652, "unknown"),
    (8654, "unknown"),
    (8701, "unknown"),
    (8800, "unknown"),
    (8873, "unknown"),
    (8899, "unknown"),
    (8994, "unknown"),
    (9001, "unknown"),
    (9002, "unknown"),
    (9003, "unknown"),
    (9009, "unknown"),
    (9010, "unknown"),
    (9011, "unknown"),
    (9040, "unknown"),
    (9050, "unknown"),
    (9071, "unknown"),
    (9080, "unknown"),
    (9081, "unknown"),
    (9091, "unknown"),
    (9099, "unknown"),
    (9101, "unknown"),
    (9103, "unknown"),
    (9110, "unknown"),
    (9111, "unknown"),
    (9200, "unknown"),
    (9207, "unknown"),
    (9220, "unknown"),
    (9290, "unknown"),
    (9415, "unknown"),
    (9418, "unknown"),
    (9485, "unknown"),
    (9500, "unknown"),
    (9502, "unknown"),
    (9503, "unknown"),
    (9535, "unknown"),
    (9575, "unknown"),
    (9593, "unknown"),
    (9594, "unknown"),
    (9595, "unknown"),
    (9618, "unknown"),
    (9666, "unknown"),
    (9876, "unknown"),
    (9877, "unknown"),
    (9878, "unknown"),
    (9898, "unknown"),
    (9900, "unknown"),
    (9917, "unknown"),
    (9929, "unknown"),
    (9943, "unknown"),
    (9944, "unknown"),
    (9968, "unknown"),
    (9998, "unknown"),
    (10001, "unknown"),
    (10002, "unknown"),
    (10003, "unknown"),
    (10004, "unknown"),
    (10009, "unknown"),
    (10012, "unknown"),
    (10024, "unknown"),
    (10025, "unknown"),
    (10082, "unknown"),
    (10180, "unknown"),
    (10215, "unknown"),
    (10243, "unknown"),
    (10566, "unknown"),
    (10616, "unknown"),
    (10617, "unknown"),
    (10621, "unknown"),
    (10626, "unknown"),
    (10628, "unknown"),
    (10629, "unknown"),
    (10778, "unknown"),
    (11110, "unknown"),
    (11111, "unknown"),
    (11967, "unknown"),
    (12000, "unknown"),
    (12174, "unknown"),
    (12265, "unknown"),
    (12345, "unknown"),
    (13456, "unknown"),
    (13722, "unknown"),
    (13782, "unknown"),
    (13783, "unknown"),
    (14000, "unknown"),
    (14238, "unknown"),
    (14441, "unknown"),
    (14442, "unknown"),
    (15000, "unknown"),
    (15002, "unknown"),
    (15003, "unknown"),
    (15004, "unknown"),
    (15660, "unknown"),
    (15742, "unknown"),
    (16000, "unknown"),
    (16001, "unknown"),
    (16012, "unknown"),
    (16016, "unknown"),
    (16018, "unknown"),
    (16080, "unknown"),
    (16113, "unknown"),
    (16992, "unknown"),
    (16993, "unknown"),
    (17877, "unknown"),
    (17988, "unknown"),
    (18040, "unknown"),
    (18101, "unknown"),
    (18988, "unknown"),
    (19101, "unknown"),
    (19283, "unknown"),
    (19315, "unknown"),
    (19350, "unknown"),
    (19780, "unknown"),
    (19801, "unknown"),
    (19842, "unknown"),
    (20000, "unknown"),
    (20005, "unknown"),
    (20031, "unknown"),
    (20221, "unknown"),
    (20222, "unknown"),
    (20828, "unknown"),
    (21571, "unknown"),
    (22939, "unknown"),
    (23502, "unknown"),
    (24444, "unknown"),
    (24800, "unknown"),
    (25734, "unknown"),
    (25735, "unknown"),
    (26214, "unknown"),
    (27000, "unknown"),
    (27352, "unknown"),
    (27353, "unknown"),
    (27355, "unknown"),
    (27356, "unknown"),
    (27715, "unknown"),
    (28201, "unknown"),
    (30000, "unknown"),
    (30718, "unknown"),
    (30951, "unknown"),
    (31038, "unknown"),
    (31337, "unknown"),
    (32769, "unknown"),
    (32770, "unknown"),
    (32771, "unknown"),
    (32772, "unknown"),
    (32773, "unknown"),
    (32774, "unknown"),
    (32775, "unknown"),
    (32776, "unknown"),
    (32777, "unknown"),
    (32778, "unknown"),
    (32779, "unknown"),
    (32780, "unknown"),
    (32781, "unknown"),
    (32782, "unknown"),
    (32783, "unknown"),
    (32784, "unknown"),
    (32785, "unknown"),
    (33354, "unknown"),
    (33899, "unknown"),
    (34571, "unknown"),
    (34572, "unknown"),
    (34573, "unknown"),
    (35500, "unknown"),
    (38292, "unknown"),
    (40193, "unknown"),
    (40911, "unknown"),
    (41511, "unknown"),
    (42510, "unknown"),
    (44176, "unknown"),
    (44442, "unknown"),
    (44443, "unknown"),
    (44501, "unknown"),
    (45100, "unknown"),
    (48080, "unknown"),
    (49152, "unknown"),
    (49153, "unknown"),
    (49154, "unknown"),
    (49155, "unknown"),
    (49156, "unknown"),
    (49157, "unknown"),
    (49158, "unknown"),
    (49159, "unknown"),
    (49160, "unknown"),
    (49161, "unknown"),
    (49163, "unknown"),
    (49165, "unknown"),
    (49167, "unknown"),
    (49175, "unknown"),
    (49176, "unknown"),
    (49400, "unknown"),
    (49999, "unknown"),
    (50000, "unknown"),
    (50001, "unknown"),
    (50002, "unknown"),
    (50003, "unknown"),
    (50006, "unknown"),
    (50300, "unknown"),
    (50389, "unknown"),
    (50500, "unknown"),
    (50636, "unknown"),
    (50800, "unknown"),
    (51103, "unknown"),
    (51493, "unknown"),
    (52673, "unknown"),
    (52822, "unknown"),
    (52848, "unknown"),
    (52869, "unknown"),
    (54045, "unknown"),
    (54328, "unknown"),
    (55055, "unknown"),
    (55056, "unknown"),
    (55555, "unknown"),
    (55600, "unknown"),
    (56737, "unknown"),
    (56738, "unknown"),
    (57294, "unknown"),
    (57797, "unknown"),
    (58080, "unknown"),
    (60020, "unknown"),
    (60443, "unknown"),
    (61532, "unknown"),
    (61900, "unknown"),
    (62078, "unknown"),
    (63331, "unknown"),
    (64623, "unknown"),
    (64680, "unknown"),
    (65000, "unknown"),
    (65129, "unknown"),
    (65389, "unknown"),
    (69, "tftp"),
    (123, "ntp"),
    (162, "snmptrap"),
    (1194, "openvpn"),
    (1813, "radacct"),
    (5353, "mdns"),
    (6379, "redis"),
    (11211, "memcache"),
    (27017, "mongod"),
    (989, "ftps-data"),
    (574, "ftp-agent"),
];
